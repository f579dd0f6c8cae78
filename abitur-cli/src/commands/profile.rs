//! Profile command - show and update the applicant profile

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use abitur_core::{LogEvent, OperationResult, ProfileUpdate};

use super::{get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the signed-in profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update profile fields
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Show { json } => show(json),
        ProfileCommands::Update { name, email, json } => update(name, email, json),
    }
}

fn show(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let Some(profile) = ctx.account_service.session().current() else {
        anyhow::bail!("Not signed in. Use: ab login <email>");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("{}", "Applicant Profile".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["ID", &profile.id]);
    table.add_row(vec!["Name", &profile.name]);
    table.add_row(vec!["Email", &profile.email]);
    table.add_row(vec!["Registered", &profile.registered_at.to_rfc3339()]);
    table.add_row(vec!["Updated", &profile.updated_at.to_rfc3339()]);
    table.add_row(vec!["Progress", &profile.progress.to_string()]);
    table.add_row(vec![
        "Achievements",
        &profile.achievements.len().to_string(),
    ]);
    println!("{}", table);

    Ok(())
}

fn update(name: Option<String>, email: Option<String>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let update = ProfileUpdate { name, email };
    if update.is_empty() {
        anyhow::bail!("Nothing to update: pass --name and/or --email");
    }

    match ctx.account_service.update_profile(&update) {
        Ok(profile) => {
            log_event(
                &logger,
                LogEvent::new("profile_updated").with_command("profile update"),
            );

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&OperationResult::ok(&profile))?
                );
                return Ok(());
            }

            output::success("Profile updated");
            println!("  Name:  {}", profile.name);
            println!("  Email: {}", profile.email);
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("profile_update_failed")
                    .with_command("profile update")
                    .with_error(e.to_string()),
            );

            if json {
                let failed: OperationResult<()> = OperationResult::fail(e.to_string());
                println!("{}", serde_json::to_string_pretty(&failed)?);
            }
            Err(e.into())
        }
    }
}
