//! Register command - create the applicant profile

use anyhow::Result;
use dialoguer::Input;

use abitur_core::{LogEvent, OperationResult};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(name: Option<String>, email: Option<String>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let result = ctx.account_service.register(&name, &email);

    match result {
        Ok(registered) => {
            log_event(
                &logger,
                LogEvent::new("register_completed").with_command("register"),
            );

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&OperationResult::ok(&registered))?
                );
                return Ok(());
            }

            output::success(&format!("Profile created for {}", registered.profile.name));
            println!("  ID:    {}", registered.profile.id);
            println!("  Email: {}", registered.profile.email);
            println!();
            output::info("Next: ab profile show");
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
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
