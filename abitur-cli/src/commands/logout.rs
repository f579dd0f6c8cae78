//! Logout command - sign out and delete the stored profile

use anyhow::Result;

use abitur_core::{LogEvent, Navigation, OperationResult};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let was_authenticated = ctx.account_service.session().is_authenticated();
    let next: Navigation = ctx.account_service.logout()?;

    log_event(&logger, LogEvent::new("logout_completed").with_command("logout"));

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(next))?);
        return Ok(());
    }

    if was_authenticated {
        output::success("Signed out. The stored profile has been removed.");
    } else {
        output::warning("No active session.");
    }
    Ok(())
}
