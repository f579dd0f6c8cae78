//! Standards command - physical fitness assessment tables

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use abitur_core::domain::Exercise;

use super::get_context;
use crate::output;

pub fn run(exercise: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let service = &ctx.fitness_service;

    let rows: Vec<(Exercise, _)> = match exercise {
        Some(name) => {
            let exercise: Exercise = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            vec![(exercise, service.standard_for(exercise))]
        }
        None => service.all(),
    };

    if json {
        let value: Vec<_> = rows
            .iter()
            .map(|(exercise, standard)| {
                json!({
                    "exercise": exercise.as_str(),
                    "satisfactory": standard.satisfactory,
                    "good": standard.good,
                    "excellent": standard.excellent,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Fitness Standards".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Exercise", "Satisfactory", "Good", "Excellent"]);
    for (exercise, standard) in &rows {
        table.add_row(vec![
            exercise.as_str(),
            standard.satisfactory,
            standard.good,
            standard.excellent,
        ]);
    }
    println!("{}", table);

    Ok(())
}
