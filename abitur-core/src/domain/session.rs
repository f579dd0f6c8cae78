//! Session domain model

use serde::{Deserialize, Serialize};

use crate::domain::UserProfile;

/// In-memory authentication state for the current process
///
/// Holding a profile is what "authenticated" means; there is no separate
/// flag to drift out of sync with the cached record. The session lives for
/// the duration of the process and is rebuilt from the store at startup.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<UserProfile>,
}

impl Session {
    /// True if a profile is signed in
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The signed-in profile, if any
    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Cache a profile and mark the session authenticated
    pub fn sign_in(&mut self, profile: UserProfile) {
        self.current = Some(profile);
    }

    /// Drop the cached profile and mark the session unauthenticated
    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Where the caller should navigate after an account operation
///
/// The account layer never performs navigation itself; it hands the intent
/// back to whoever drives the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Profile,
    Home,
}
