//! Domain error types

use thiserror::Error;

/// A role name that is not one of `system`, `user`, `assistant`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct InvalidRoleError(pub String);

/// Errors produced by the message adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Every inbound message was filtered out, leaving nothing to send.
    #[error("no valid messages to send")]
    NoValidMessages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_role_display() {
        let error = InvalidRoleError("moderator".to_string());
        assert_eq!(error.to_string(), "invalid role: moderator");
    }

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(
            InvalidInputError::NoValidMessages.to_string(),
            "no valid messages to send"
        );
    }
}
