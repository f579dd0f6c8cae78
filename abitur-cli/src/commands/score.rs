//! Score command - combined admission score calculation

use anyhow::Result;
use colored::Colorize;

use abitur_core::{ExamScores, ScoreBand};

use super::get_context;
use crate::output;

pub fn run(russian: u32, math: u32, specialty: u32, fitness: u32, json: bool) -> Result<()> {
    let ctx = get_context()?;

    let summary = ctx.scoring_service.calculate(&ExamScores {
        russian,
        math,
        specialty,
        fitness,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Score Calculation".bold());
    println!();
    println!("  Exam total:    {}", summary.exam_total);
    println!("  Fitness:       {}", summary.fitness);
    println!("  {}", format!("TOTAL:         {}", summary.total).bold());
    println!();
    println!("  {}", output::render_bar(summary.progress_percent));
    println!();

    match summary.band {
        ScoreBand::Strong => output::success(summary.band.guidance()),
        ScoreBand::Average => output::info(summary.band.guidance()),
        ScoreBand::NeedsImprovement => output::warning(summary.band.guidance()),
    }

    // Show how far the total reaches into the catalog
    let reachable = ctx.catalog_service.admissible(summary.total)?;
    if !reachable.is_empty() {
        println!();
        println!(
            "This total reaches the minimum score of {} catalog entries; see: ab catalog list --admissible-with {}",
            reachable.len(),
            summary.total
        );
    }

    Ok(())
}
