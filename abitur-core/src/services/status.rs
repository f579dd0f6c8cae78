//! Status service - store and session summary

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::domain::Session;
use crate::ports::{CatalogSource, ProfileStore};

/// Status service for the overall local state
pub struct StatusService {
    store: Arc<dyn ProfileStore>,
    catalog: Arc<dyn CatalogSource>,
}

impl StatusService {
    pub fn new(store: Arc<dyn ProfileStore>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self { store, catalog }
    }

    /// Summarize the stored record, the session, and the catalog
    pub fn get_status(&self, session: &Session) -> Result<StatusSummary> {
        let stored = self.store.load()?;
        let catalog_entries = self.catalog.universities()?.len();

        let current = session.current();

        Ok(StatusSummary {
            registered: stored.is_some(),
            authenticated: session.is_authenticated(),
            name: current.map(|p| p.name.clone()),
            email: current.map(|p| p.email.clone()),
            progress: current.map(|p| p.progress),
            achievements: current.map(|p| p.achievements.len()),
            catalog_entries,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    /// A record exists in the store
    pub registered: bool,
    /// The session holds a signed-in profile
    pub authenticated: bool,
    pub name: Option<String>,
    pub email: Option<String>,
    pub progress: Option<u32>,
    pub achievements: Option<usize>,
    pub catalog_entries: usize,
}
