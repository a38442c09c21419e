//! Completion gateway port
//!
//! Defines the interface for communicating with the remote completion
//! service. Implementations (adapters) live in the infrastructure layer.

use crate::config::GenerationParams;
use async_trait::async_trait;
use parley_domain::Turn;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network or transport failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service rejected the request with a structured error.
    #[error("service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The service answered, but with no usable reply content.
    #[error("service returned no reply content")]
    EmptyReply,
}

/// Gateway to the remote completion service
///
/// One invocation issues exactly one outbound request carrying the full
/// ordered message list and returns the single top reply's text. No caching,
/// no retries.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        messages: &[Turn],
        params: &GenerationParams,
    ) -> Result<String, CompletionError>;
}
