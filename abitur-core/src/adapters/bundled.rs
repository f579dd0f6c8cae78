//! Bundled catalog adapter
//!
//! Built-in dataset of well-known military higher-education institutions,
//! used when no external catalog file is configured. IDs are fixed so the
//! same entry keeps the same identity across runs.

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{University, UniversityKind};
use crate::ports::CatalogSource;

/// Catalog source backed by the built-in dataset
pub struct BundledCatalog;

impl BundledCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BundledCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for BundledCatalog {
    fn universities(&self) -> Result<Vec<University>> {
        Ok(bundled_universities())
    }
}

fn entry(
    id: &str,
    name: &str,
    city: &str,
    kind: UniversityKind,
    min_score: u32,
    description: &str,
) -> University {
    let mut u = University::new(
        Uuid::parse_str(id).expect("bundled catalog ID is a valid UUID"),
        name,
        city,
        kind,
        min_score,
    );
    u.description = description.to_string();
    u
}

/// The built-in catalog entries
pub fn bundled_universities() -> Vec<University> {
    vec![
        entry(
            "11111111-1111-1111-1111-111111111111",
            "Zhukovsky-Gagarin Air Force Academy",
            "Voronezh",
            UniversityKind::Academy,
            210,
            "Flight operations, aviation engineering and radio-electronics programs.",
        ),
        entry(
            "22222222-2222-2222-2222-222222222222",
            "Mozhaisky Military Space Academy",
            "Saint Petersburg",
            UniversityKind::Academy,
            205,
            "Space systems, geodesy and information technology programs.",
        ),
        entry(
            "33333333-3333-3333-3333-333333333333",
            "Ryazan Guards Higher Airborne Command School",
            "Ryazan",
            UniversityKind::School,
            185,
            "Airborne troops command training with an emphasis on field exercises.",
        ),
        entry(
            "44444444-4444-4444-4444-444444444444",
            "Kuznetsov Naval Academy",
            "Saint Petersburg",
            UniversityKind::Academy,
            195,
            "Navigation, weapons systems and fleet command programs.",
        ),
        entry(
            "55555555-5555-5555-5555-555555555555",
            "Military University of the Ministry of Defence",
            "Moscow",
            UniversityKind::Institute,
            220,
            "Humanities, law, linguistics and military journalism programs.",
        ),
        entry(
            "66666666-6666-6666-6666-666666666666",
            "Military Academy of Logistics",
            "Saint Petersburg",
            UniversityKind::Academy,
            165,
            "Logistics, transport support and materiel management programs.",
        ),
        entry(
            "77777777-7777-7777-7777-777777777777",
            "Serpukhov Branch, Strategic Missile Forces Academy",
            "Serpukhov",
            UniversityKind::Institute,
            150,
            "Missile engineering and automated control systems programs.",
        ),
        entry(
            "88888888-8888-8888-8888-888888888888",
            "Novosibirsk Higher Military Command School",
            "Novosibirsk",
            UniversityKind::School,
            140,
            "Motorized rifle command training and reconnaissance programs.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_nonempty() {
        let catalog = BundledCatalog::new();
        let entries = catalog.universities().unwrap();
        assert!(entries.len() >= 8);
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let entries = bundled_universities();
        let mut ids: Vec<_> = entries.iter().map(|u| u.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_bundled_entries_cover_every_kind() {
        let entries = bundled_universities();
        for kind in [
            UniversityKind::Academy,
            UniversityKind::Institute,
            UniversityKind::School,
        ] {
            assert!(entries.iter().any(|u| u.kind == kind));
        }
    }
}
