//! JSON file adapter for the profile store
//!
//! One JSON document at a fixed path. The record shape is written as-is,
//! with no version marker and no migration step.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::UserProfile;
use crate::ports::ProfileStore;

/// File-backed single-slot profile store
///
/// Writes are plain whole-file replacements: the last writer wins, and
/// nothing stops two processes from racing on the same path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A payload that does not parse reads as an empty slot.
        Ok(serde_json::from_str(&content).ok())
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
