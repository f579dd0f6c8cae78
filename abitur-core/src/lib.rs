//! Abitur Core - Business logic for applicant guidance
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (UserProfile, University, etc.)
//! - **ports**: Trait definitions for external dependencies (ProfileStore, CatalogSource)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file, bundled catalog, CSV)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::bundled::BundledCatalog;
use adapters::csv_catalog::CsvCatalog;
use adapters::json_file::JsonFileStore;
use config::Config;
use ports::{CatalogSource, ProfileStore};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    Answer, AptitudeCategory, AptitudeOutcome, ExamScores, Navigation, ProfileUpdate, Role,
    ScoreBand, ScoreSummary, Session, University, UniversityKind, UserProfile,
};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for Abitur operations
///
/// This is the primary entry point for all business logic. It holds the
/// profile store, configuration, and all services. Creating a context
/// rebuilds the session from the store, so a stored profile is already
/// signed in when the constructor returns.
pub struct AbiturContext {
    pub config: Config,
    pub store: Arc<dyn ProfileStore>,
    pub account_service: AccountService,
    pub scoring_service: ScoringService,
    pub aptitude_service: AptitudeService,
    pub catalog_service: CatalogService,
    pub fitness_service: FitnessService,
    pub status_service: StatusService,
}

impl AbiturContext {
    /// Create a new Abitur context rooted in the data directory
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let store: Arc<dyn ProfileStore> =
            Arc::new(JsonFileStore::new(data_dir.join("profile.json")));

        // An external CSV catalog takes precedence over the bundled one
        let catalog: Arc<dyn CatalogSource> = match &config.catalog_file {
            Some(path) => Arc::new(CsvCatalog::new(path)),
            None => Arc::new(BundledCatalog::new()),
        };

        let mut account_service = AccountService::new(Arc::clone(&store));
        account_service.initialize()?;

        let scoring_service = ScoringService::new();
        let aptitude_service = AptitudeService::new();
        let catalog_service = CatalogService::new(Arc::clone(&catalog));
        let fitness_service = FitnessService::new();
        let status_service = StatusService::new(Arc::clone(&store), Arc::clone(&catalog));

        Ok(Self {
            config,
            store,
            account_service,
            scoring_service,
            aptitude_service,
            catalog_service,
            fitness_service,
            status_service,
        })
    }
}
