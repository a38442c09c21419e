//! Role-labeled console lines

use colored::Colorize;
use std::fmt::Display;

/// Formats chat exchanges and errors for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Echo of the user's message with a role label.
    pub fn user_line(text: &str) -> String {
        format!("{} {}", "you:".dimmed(), text)
    }

    /// The assistant's reply, labeled with the session's display name.
    pub fn assistant_line(name: &str, reply: &str) -> String {
        format!("{} {}", format!("{}:", name).cyan().bold(), reply)
    }

    /// A recoverable turn-level error.
    pub fn error_line(error: &dyn Display) -> String {
        format!("{} {}", "error:".red().bold(), error)
    }
}
