//! Abitur CLI - applicant guidance in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{catalog, login, logout, logs, profile, quiz, register, score, standards, status};

/// Abitur - applicant guidance in your terminal
#[derive(Parser)]
#[command(name = "ab", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show profile and session status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new applicant profile
    Register {
        /// Display name (prompted for if omitted)
        name: Option<String>,
        /// Email address (prompted for if omitted)
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in with the registered email
    Login {
        /// Email address (prompted for if omitted)
        email: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out and delete the stored profile
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or update the profile
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// Calculate the combined admission score
    Score {
        /// Russian language exam points
        #[arg(long, default_value_t = 0)]
        russian: u32,
        /// Mathematics exam points
        #[arg(long, default_value_t = 0)]
        math: u32,
        /// Specialty subject exam points
        #[arg(long, default_value_t = 0)]
        specialty: u32,
        /// Physical fitness assessment points
        #[arg(long, default_value_t = 0)]
        fitness: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the professional suitability test
    Quiz {
        /// Comma-separated yes/no answers (interactive if omitted)
        #[arg(long)]
        answers: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse and export the university catalog
    Catalog {
        #[command(subcommand)]
        command: catalog::CatalogCommands,
    },

    /// Show physical fitness standards
    Standards {
        /// Exercise name (all if omitted)
        exercise: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json),
        Commands::Register { name, email, json } => register::run(name, email, json),
        Commands::Login { email, json } => login::run(email, json),
        Commands::Logout { json } => logout::run(json),
        Commands::Profile { command } => profile::run(command),
        Commands::Score {
            russian,
            math,
            specialty,
            fitness,
            json,
        } => score::run(russian, math, specialty, fitness, json),
        Commands::Quiz { answers, json } => quiz::run(answers, json),
        Commands::Catalog { command } => catalog::run(command),
        Commands::Standards { exercise, json } => standards::run(exercise.as_deref(), json),
        Commands::Logs { command } => logs::run(command),
    }
}
