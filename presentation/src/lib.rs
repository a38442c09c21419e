//! Presentation layer for parley
//!
//! This crate contains CLI definitions, output formatters, the in-flight
//! spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::RequestSpinner;
