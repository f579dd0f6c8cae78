//! CSV catalog adapter
//!
//! Loads the university catalog from a CSV file with the header row
//! `name,city,kind,min_score,description` (description optional).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{University, UniversityKind};
use crate::ports::CatalogSource;

/// Catalog source backed by a CSV file
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    city: String,
    kind: String,
    min_score: u32,
    #[serde(default)]
    description: String,
}

impl CatalogSource for CsvCatalog {
    fn universities(&self) -> Result<Vec<University>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            Error::storage(format!("cannot open catalog {}: {}", self.path.display(), e))
        })?;

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            let kind: UniversityKind = row.kind.parse().map_err(Error::Validation)?;

            let mut university = University::new(Uuid::new_v4(), row.name, row.city, kind, row.min_score);
            university.description = row.description;
            entries.push(university);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_catalog_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "name,city,kind,min_score,description\n\
             Test Academy,Kazan,academy,180,Engineering programs.\n\
             Test School,Omsk,school,130,\n",
        )
        .unwrap();

        let entries = CsvCatalog::new(&path).universities().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Test Academy");
        assert_eq!(entries[0].kind, UniversityKind::Academy);
        assert_eq!(entries[0].min_score, 180);
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_unknown_kind_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "name,city,kind,min_score,description\nX,Y,college,100,\n",
        )
        .unwrap();

        let err = CsvCatalog::new(&path).universities().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_missing_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let err = CsvCatalog::new(dir.path().join("absent.csv"))
            .universities()
            .unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }
}
