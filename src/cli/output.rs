//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (disabled by NO_COLOR or `color = false`):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: information
//! - Dimmed: help and secondary info

use std::io::{self, Write as IoWrite};

use console::style;

/// Turn styling on or off for the whole process.
pub fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ removed key`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ gpg could not be found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), style(msg).red());
}

/// Print a warning (bold yellow), set off by blank lines.
///
/// Example: `⚠ Ensure that these files are backed up`
pub fn warn(msg: &str) {
    println!();
    for (i, line) in msg.lines().enumerate() {
        let marker = if i == 0 { "⚠" } else { " " };
        println!("{} {}", style(marker).yellow(), style(line).yellow().bold());
    }
    println!();
}

/// Print an informational message (cyan).
pub fn info(msg: &str) {
    println!("{}", style(msg).cyan());
}

/// Print a hint message (cyan arrow).
///
/// Example: `→ git config user.signingkey <key id>`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), msg);
}

/// Print an indented block, e.g. the entered identity.
pub fn block(text: &str) {
    println!();
    for line in text.lines() {
        println!("  {}", line);
    }
    println!();
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    print!("{}... ", style(label).dim());
    let _ = io::stdout().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    if success {
        println!("{}", style("ok").green());
    } else {
        println!("{}", style("failed").red());
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}
