//! CLI command implementations

pub mod catalog;
pub mod login;
pub mod logout;
pub mod logs;
pub mod profile;
pub mod quiz;
pub mod register;
pub mod score;
pub mod standards;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};

use abitur_core::{AbiturContext, EntryPoint, LogEvent, LoggingService};

/// Get the data directory from environment or default
pub fn get_abitur_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ABITUR_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".abitur")
    }
}

/// Get or create the Abitur context
pub fn get_context() -> Result<AbiturContext> {
    let abitur_dir = get_abitur_dir();

    std::fs::create_dir_all(&abitur_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", abitur_dir))?;

    AbiturContext::new(&abitur_dir).context("Failed to initialize abitur context")
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let abitur_dir = get_abitur_dir();
    std::fs::create_dir_all(&abitur_dir).ok()?;
    LoggingService::new(&abitur_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}
