//! Login command - sign in with the registered email

use anyhow::Result;
use dialoguer::Input;

use abitur_core::{LogEvent, OperationResult};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(email: Option<String>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    match ctx.account_service.login(email.trim()) {
        Ok(profile) => {
            log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&OperationResult::ok(&profile))?
                );
                return Ok(());
            }

            output::success(&format!("Signed in as {}", profile.name));
            Ok(())
        }
        Err(e) => {
            // Only the collapsed failure reason is ever logged or shown
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
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
