//! Application layer for parley
//!
//! This crate contains the chat session service, port definitions, and
//! generation parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::completion_gateway::{CompletionError, CompletionGateway};
pub use session::{ChatSession, TurnError};
