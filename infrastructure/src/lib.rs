//! Infrastructure layer for parley
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileChatConfig, FileConfig, FileProviderConfig, FileReplConfig,
};
pub use openai::gateway::OpenAiGateway;
