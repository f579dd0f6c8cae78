//! Applicant profile domain model

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a monotonic, time-derived profile ID
///
/// Lower 48 bits hold the millisecond timestamp, upper 16 bits a
/// per-process counter, so IDs created in the same millisecond stay unique.
fn generate_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    format!("{:x}", (timestamp << 16) | counter)
}

/// Role assigned to every profile at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
}

/// The locally persisted applicant record
///
/// Exactly one record exists at a time: the store holds a single slot, and
/// registering again replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Set at creation, never touched afterwards
    pub registered_at: DateTime<Utc>,
    /// Stamped on every profile update
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl UserProfile {
    /// Create a new profile with a fresh ID and default fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.into(),
            email: email.into(),
            role: Role::Applicant,
            registered_at: now,
            updated_at: now,
            progress: 0,
            achievements: Vec::new(),
        }
    }

    /// Validate profile data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty");
        }
        if self.email.trim().is_empty() {
            return Err("email cannot be empty");
        }
        Ok(())
    }
}

/// Bounded set of updatable profile fields
///
/// Only name and email can change after registration; absent fields are
/// left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileUpdate {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Merge the set fields into an existing profile
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = UserProfile::new("Ivan Petrov", "ivan@example.com");
        assert_eq!(profile.name, "Ivan Petrov");
        assert_eq!(profile.email, "ivan@example.com");
        assert_eq!(profile.role, Role::Applicant);
        assert_eq!(profile.progress, 0);
        assert!(profile.achievements.is_empty());
        assert_eq!(profile.registered_at, profile.updated_at);
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let a = UserProfile::new("A", "a@x.com");
        let b = UserProfile::new("B", "b@x.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = UserProfile::new("Ivan", "ivan@example.com");
        assert!(profile.validate().is_ok());

        profile.name = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut profile = UserProfile::new("Ivan", "ivan@example.com");
        let update = ProfileUpdate {
            name: Some("Pyotr".to_string()),
            email: None,
        };
        update.apply(&mut profile);
        assert_eq!(profile.name, "Pyotr");
        assert_eq!(profile.email, "ivan@example.com");
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_and_iso_timestamps() {
        let profile = UserProfile::new("Ivan", "ivan@example.com");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("registeredAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["role"], "applicant");
        // RFC 3339 timestamps serialize with a date-time separator
        assert!(json["registeredAt"].as_str().unwrap().contains('T'));
    }
}
