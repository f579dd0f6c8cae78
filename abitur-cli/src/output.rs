//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render a 0-100 percentage as a fixed-width bar
pub fn render_bar(percent: u32) -> String {
    const WIDTH: u32 = 25;
    let percent = percent.min(100);
    let filled = (percent * WIDTH) / 100;
    let empty = WIDTH - filled;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled as usize),
        "-".repeat(empty as usize),
        percent
    )
}
