//! Integration tests for context wiring
//!
//! Verify that a context built over a data directory picks up the stored
//! profile, the configured catalog source, and exports correctly.

use std::fs;

use tempfile::TempDir;

use abitur_core::services::CatalogColumn;
use abitur_core::services::CatalogService;
use abitur_core::{AbiturContext, ExamScores, UniversityKind};

#[test]
fn context_signs_in_a_stored_profile_on_startup() {
    let dir = TempDir::new().unwrap();

    {
        let mut ctx = AbiturContext::new(dir.path()).unwrap();
        assert!(!ctx.account_service.session().is_authenticated());
        ctx.account_service.register("A", "a@x.com").unwrap();
    }

    // A new context over the same directory starts authenticated
    let ctx = AbiturContext::new(dir.path()).unwrap();
    assert!(ctx.account_service.session().is_authenticated());
    assert_eq!(
        ctx.account_service.session().current().unwrap().email,
        "a@x.com"
    );
}

#[test]
fn context_uses_the_bundled_catalog_by_default() {
    let dir = TempDir::new().unwrap();
    let ctx = AbiturContext::new(dir.path()).unwrap();

    let entries = ctx.catalog_service.list().unwrap();
    assert!(entries.len() >= 8);
}

#[test]
fn context_prefers_a_configured_csv_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.csv");
    fs::write(
        &catalog_path,
        "name,city,kind,min_score,description\n\
         Only Academy,Tula,academy,170,Single-entry catalog.\n",
    )
    .unwrap();

    fs::write(
        dir.path().join("settings.json"),
        format!(
            r#"{{"app": {{"catalogFile": "{}"}}}}"#,
            catalog_path.display()
        ),
    )
    .unwrap();

    let ctx = AbiturContext::new(dir.path()).unwrap();
    let entries = ctx.catalog_service.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Only Academy");
    assert_eq!(entries[0].kind, UniversityKind::Academy);
}

#[test]
fn score_summary_feeds_the_admissibility_filter() {
    let dir = TempDir::new().unwrap();
    let ctx = AbiturContext::new(dir.path()).unwrap();

    let summary = ctx.scoring_service.calculate(&ExamScores {
        russian: 70,
        math: 65,
        specialty: 60,
        fitness: 20,
    });
    assert_eq!(summary.total, 215);

    let reachable = ctx.catalog_service.admissible(summary.total).unwrap();
    assert!(!reachable.is_empty());
    assert!(reachable.iter().all(|u| u.min_score <= summary.total));
}

#[test]
fn exported_catalog_is_valid_csv() {
    let dir = TempDir::new().unwrap();
    let ctx = AbiturContext::new(dir.path()).unwrap();

    let mut entries = ctx.catalog_service.list().unwrap();
    CatalogService::sort(&mut entries, CatalogColumn::MinScore, true);

    let out = dir.path().join("export.csv");
    ctx.catalog_service.export_csv(&entries, &out).unwrap();

    let mut reader = csv::Reader::from_path(&out).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("Name"));
    assert_eq!(reader.records().count(), entries.len());
}
