//! Catalog source port - university dataset abstraction

use crate::domain::result::Result;
use crate::domain::University;

/// Source of university catalog entries
///
/// Implementations (adapters) provide the actual dataset: the bundled
/// catalog or an external CSV file.
pub trait CatalogSource: Send + Sync {
    /// All catalog entries, in source order
    fn universities(&self) -> Result<Vec<University>>;
}
