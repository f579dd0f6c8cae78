//! In-memory profile store for tests

use std::sync::Mutex;

use crate::domain::result::Result;
use crate::domain::UserProfile;
use crate::ports::ProfileStore;

/// Single-slot store held in memory, mirroring the file adapter's semantics
pub struct MemoryStore {
    slot: Mutex<Option<UserProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        *self.slot.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
