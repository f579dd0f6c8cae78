//! Catalog command - browse and export the university catalog

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use abitur_core::adapters::csv_catalog::CsvCatalog;
use abitur_core::services::{CatalogColumn, CatalogService};
use abitur_core::{University, UniversityKind};

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog entries
    List {
        /// Filter by institution kind (academy, institute, school)
        #[arg(long)]
        kind: Option<String>,
        /// Case-insensitive search over name, city and description
        #[arg(long)]
        search: Option<String>,
        /// Keep only entries reachable with this combined score
        #[arg(long)]
        admissible_with: Option<u32>,
        /// Sort by column (name, city, kind, score)
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
        /// Read the catalog from a CSV file instead of the configured source
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the catalog to a CSV file
    Export {
        /// Output file path
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Read the catalog from a CSV file instead of the configured source
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(command: CatalogCommands) -> Result<()> {
    match command {
        CatalogCommands::List {
            kind,
            search,
            admissible_with,
            sort,
            desc,
            file,
            json,
        } => list(kind, search, admissible_with, sort, desc, file, json),
        CatalogCommands::Export { output, file } => export(output, file),
    }
}

/// Pick the catalog service: an explicit file wins over the configured source
fn catalog_service(file: Option<PathBuf>) -> Result<CatalogService> {
    if let Some(path) = file {
        return Ok(CatalogService::new(Arc::new(CsvCatalog::new(path))));
    }
    let ctx = get_context()?;
    Ok(ctx.catalog_service)
}

fn list(
    kind: Option<String>,
    search: Option<String>,
    admissible_with: Option<u32>,
    sort: Option<String>,
    desc: bool,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let service = catalog_service(file)?;

    let kind: Option<UniversityKind> = match kind {
        Some(k) => Some(k.parse().map_err(|e: String| anyhow::anyhow!(e))?),
        None => None,
    };

    let mut entries: Vec<University> = match &search {
        Some(term) => service.search(term)?,
        None => service.filter(kind)?,
    };
    // Search and kind filter compose
    if search.is_some() {
        if let Some(kind) = kind {
            entries.retain(|u| u.kind == kind);
        }
    }
    if let Some(total) = admissible_with {
        entries.retain(|u| u.min_score <= total);
    }

    if let Some(column) = sort {
        let column: CatalogColumn = column.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        CatalogService::sort(&mut entries, column, !desc);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        output::warning("No catalog entries match.");
        return Ok(());
    }

    println!("{}", "University Catalog".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Name", "City", "Kind", "Min Score"]);
    for u in &entries {
        table.add_row(vec![
            u.name.clone(),
            u.city.clone(),
            u.kind.to_string(),
            u.min_score.to_string(),
        ]);
    }
    println!("{}", table);
    println!();
    println!("{} entries", entries.len());

    Ok(())
}

fn export(output_path: Option<PathBuf>, file: Option<PathBuf>) -> Result<()> {
    let ctx = get_context()?;

    let service = match file {
        Some(path) => CatalogService::new(Arc::new(CsvCatalog::new(path))),
        None => ctx.catalog_service,
    };

    // Default target: configured export dir, else the working directory
    let output_path = output_path.unwrap_or_else(|| {
        ctx.config
            .export_dir
            .clone()
            .unwrap_or_default()
            .join("universities.csv")
    });

    let entries = service.list()?;
    service.export_csv(&entries, &output_path)?;

    output::success(&format!(
        "Exported {} entries to {}",
        entries.len(),
        output_path.display()
    ));
    Ok(())
}
