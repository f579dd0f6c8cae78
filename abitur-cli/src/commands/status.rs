//! Status command - show profile and session summary

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx
        .status_service
        .get_status(ctx.account_service.session())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Applicant Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec![
        "Profile",
        if status.registered { "registered" } else { "none" },
    ]);
    table.add_row(vec![
        "Session",
        if status.authenticated {
            "authenticated"
        } else {
            "not authenticated"
        },
    ]);
    if let Some(name) = &status.name {
        table.add_row(vec!["Name", name]);
    }
    if let Some(email) = &status.email {
        table.add_row(vec!["Email", email]);
    }
    if let Some(progress) = status.progress {
        table.add_row(vec!["Progress", &progress.to_string()]);
    }
    if let Some(achievements) = status.achievements {
        table.add_row(vec!["Achievements", &achievements.to_string()]);
    }
    table.add_row(vec!["Catalog entries", &status.catalog_entries.to_string()]);

    println!("{}", table);

    if !status.registered {
        println!();
        output::info("No profile yet. Create one with: ab register");
    }

    Ok(())
}
