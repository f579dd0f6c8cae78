//! Account service - registration, login and profile upkeep
//!
//! Manages the single locally persisted applicant record and the in-memory
//! session. Every operation is one synchronous round-trip to the store and
//! either fully succeeds or fully fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{Navigation, ProfileUpdate, Session, UserProfile};
use crate::ports::ProfileStore;
use crate::services::validation;

/// Result of a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registered {
    pub profile: UserProfile,
    /// Where the caller should navigate next
    pub next: Navigation,
}

/// Account service owning the session for the current process
pub struct AccountService {
    store: Arc<dyn ProfileStore>,
    session: Session,
}

impl AccountService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            session: Session::default(),
        }
    }

    /// Rebuild the session from the store at startup
    ///
    /// A stored record signs the session in; an empty or malformed slot
    /// leaves it signed out.
    pub fn initialize(&mut self) -> Result<()> {
        if let Some(profile) = self.store.load()? {
            self.session.sign_in(profile);
        }
        Ok(())
    }

    /// The current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a new applicant
    ///
    /// Replaces any record already in the slot without checking for one:
    /// the store keeps exactly one profile, and the newest registration
    /// wins. Signs the new profile in and returns a profile-view
    /// navigation intent.
    pub fn register(&mut self, name: &str, email: &str) -> Result<Registered> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(Error::validation("name is required"));
        }
        if !validation::is_valid_email(email) {
            return Err(Error::validation(format!("invalid email address: {}", email)));
        }

        let profile = UserProfile::new(name, email);
        self.store.save(&profile)?;
        self.session.sign_in(profile.clone());

        Ok(Registered {
            profile,
            next: Navigation::Profile,
        })
    }

    /// Log in with an email address
    ///
    /// Succeeds only when a record exists and its email matches exactly
    /// (case-sensitive). There is no password; the email is the whole
    /// credential. Both failure causes collapse into one error.
    pub fn login(&mut self, email: &str) -> Result<UserProfile> {
        match self.store.load()? {
            Some(profile) if profile.email == email => {
                self.session.sign_in(profile.clone());
                Ok(profile)
            }
            _ => Err(Error::InvalidCredentials),
        }
    }

    /// Log out and delete the stored record
    ///
    /// Returns a home navigation intent. Logging out without a stored
    /// record is not an error.
    pub fn logout(&mut self) -> Result<Navigation> {
        self.session.clear();
        self.store.delete()?;
        Ok(Navigation::Home)
    }

    /// Merge updated fields into the signed-in profile and persist it
    ///
    /// Fails without touching the store when no session is active. Only
    /// name and email are updatable; absent fields keep their values. The
    /// update timestamp is stamped on every successful call.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<UserProfile> {
        let current = self.session.current().ok_or(Error::NotAuthenticated)?;

        let update = ProfileUpdate {
            name: update.name.as_deref().map(str::trim).map(String::from),
            email: update.email.as_deref().map(str::trim).map(String::from),
        };

        if let Some(name) = &update.name {
            if name.is_empty() {
                return Err(Error::validation("name cannot be empty"));
            }
        }
        if let Some(email) = &update.email {
            if !validation::is_valid_email(email) {
                return Err(Error::validation(format!("invalid email address: {}", email)));
            }
        }

        let mut profile = current.clone();
        update.apply(&mut profile);
        profile.updated_at = chrono::Utc::now();

        self.store.save(&profile)?;
        self.session.sign_in(profile.clone());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_register_creates_record_and_signs_in() {
        let mut svc = service();
        let registered = svc.register("A", "a@x.com").unwrap();

        assert_eq!(registered.profile.name, "A");
        assert_eq!(registered.profile.email, "a@x.com");
        assert_eq!(registered.next, Navigation::Profile);
        assert!(svc.session().is_authenticated());
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let mut svc = service();
        assert!(matches!(
            svc.register("", "a@x.com").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            svc.register("A", "not-an-email").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(!svc.session().is_authenticated());
    }

    #[test]
    fn test_register_trims_inputs() {
        let mut svc = service();
        let registered = svc.register("  A  ", " a@x.com ").unwrap();
        assert_eq!(registered.profile.name, "A");
        assert_eq!(registered.profile.email, "a@x.com");
    }

    #[test]
    fn test_login_matches_email_exactly() {
        let mut svc = service();
        svc.register("A", "a@x.com").unwrap();
        svc.logout().ok();

        // logout deleted the record, so register again for the fixture
        svc.register("A", "a@x.com").unwrap();

        assert!(svc.login("a@x.com").is_ok());
        assert!(matches!(
            svc.login("b@x.com").unwrap_err(),
            Error::InvalidCredentials
        ));
        // Case-sensitive comparison
        assert!(matches!(
            svc.login("A@x.com").unwrap_err(),
            Error::InvalidCredentials
        ));
    }

    #[test]
    fn test_login_without_record_fails_the_same_way() {
        let mut svc = service();
        assert!(matches!(
            svc.login("a@x.com").unwrap_err(),
            Error::InvalidCredentials
        ));
    }

    #[test]
    fn test_logout_clears_session_and_store() {
        let mut svc = service();
        svc.register("A", "a@x.com").unwrap();

        let next = svc.logout().unwrap();
        assert_eq!(next, Navigation::Home);
        assert!(!svc.session().is_authenticated());
        assert!(svc.login("a@x.com").is_err());
    }

    #[test]
    fn test_update_requires_session() {
        let mut svc = service();
        let update = ProfileUpdate {
            name: Some("B".to_string()),
            email: None,
        };
        assert!(matches!(
            svc.update_profile(&update).unwrap_err(),
            Error::NotAuthenticated
        ));
    }

    #[test]
    fn test_update_merges_only_set_fields() {
        let mut svc = service();
        svc.register("A", "a@x.com").unwrap();
        let registered_at = svc.session().current().unwrap().registered_at;

        let update = ProfileUpdate {
            name: Some("B".to_string()),
            email: None,
        };
        let updated = svc.update_profile(&update).unwrap();

        assert_eq!(updated.name, "B");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.registered_at, registered_at);
        assert!(updated.updated_at >= registered_at);
    }

    #[test]
    fn test_update_rejects_invalid_email() {
        let mut svc = service();
        svc.register("A", "a@x.com").unwrap();

        let update = ProfileUpdate {
            name: None,
            email: Some("nope".to_string()),
        };
        assert!(matches!(
            svc.update_profile(&update).unwrap_err(),
            Error::Validation(_)
        ));
        // The cached record is untouched
        assert_eq!(svc.session().current().unwrap().email, "a@x.com");
    }

    #[test]
    fn test_registering_twice_overwrites_the_first_record() {
        let mut svc = service();
        let first = svc.register("A", "a@x.com").unwrap();
        let second = svc.register("B", "b@x.com").unwrap();

        assert_ne!(first.profile.id, second.profile.id);
        assert!(svc.login("b@x.com").is_ok());
        assert!(svc.login("a@x.com").is_err());
    }

    #[test]
    fn test_initialize_signs_in_stored_profile() {
        let store = Arc::new(MemoryStore::new());
        let mut svc = AccountService::new(store.clone());
        svc.register("A", "a@x.com").unwrap();

        let mut fresh = AccountService::new(store);
        assert!(!fresh.session().is_authenticated());
        fresh.initialize().unwrap();
        assert!(fresh.session().is_authenticated());
        assert_eq!(fresh.session().current().unwrap().email, "a@x.com");
    }
}
