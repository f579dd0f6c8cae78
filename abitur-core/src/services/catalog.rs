//! Catalog service - university filtering, search, sorting and export

use std::cmp::Ordering;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{University, UniversityKind};
use crate::ports::CatalogSource;

/// Sortable catalog columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogColumn {
    Name,
    City,
    Kind,
    MinScore,
}

impl FromStr for CatalogColumn {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(CatalogColumn::Name),
            "city" => Ok(CatalogColumn::City),
            "kind" | "type" => Ok(CatalogColumn::Kind),
            "score" | "min-score" | "min_score" => Ok(CatalogColumn::MinScore),
            other => Err(format!(
                "unknown column '{}' (expected name, city, kind, or score)",
                other
            )),
        }
    }
}

/// Compare two cell values, numerically when both parse as numbers
///
/// Mirrors how the catalog table sorts: numeric columns by value, text
/// columns lexicographically.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Catalog service over a pluggable university source
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// All entries in source order
    pub fn list(&self) -> Result<Vec<University>> {
        self.source.universities()
    }

    /// Entries of one institution type; `None` keeps everything
    pub fn filter(&self, kind: Option<UniversityKind>) -> Result<Vec<University>> {
        let mut entries = self.list()?;
        if let Some(kind) = kind {
            entries.retain(|u| u.kind == kind);
        }
        Ok(entries)
    }

    /// Case-insensitive substring search over name, city and description
    pub fn search(&self, term: &str) -> Result<Vec<University>> {
        let term = term.to_lowercase();
        let mut entries = self.list()?;
        entries.retain(|u| {
            u.name.to_lowercase().contains(&term)
                || u.city.to_lowercase().contains(&term)
                || u.description.to_lowercase().contains(&term)
        });
        Ok(entries)
    }

    /// Entries whose minimum passing score a given total reaches
    pub fn admissible(&self, total_score: u32) -> Result<Vec<University>> {
        let mut entries = self.list()?;
        entries.retain(|u| u.min_score <= total_score);
        Ok(entries)
    }

    /// Sort entries in place by one column
    pub fn sort(entries: &mut [University], column: CatalogColumn, ascending: bool) {
        entries.sort_by(|a, b| {
            let ord = match column {
                CatalogColumn::Name => compare_cells(&a.name, &b.name),
                CatalogColumn::City => compare_cells(&a.city, &b.city),
                CatalogColumn::Kind => compare_cells(a.kind.as_str(), b.kind.as_str()),
                CatalogColumn::MinScore => a.min_score.cmp(&b.min_score),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// Write entries as CSV: header row plus one record per entry
    pub fn export_csv(&self, entries: &[University], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["Name", "City", "Kind", "Min Score", "Description"])?;
        for u in entries {
            writer.write_record([
                u.name.as_str(),
                u.city.as_str(),
                u.kind.as_str(),
                &u.min_score.to_string(),
                u.description.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
