//! Configuration error types

use thiserror::Error;

/// Fatal configuration errors.
///
/// Raised before the interactive loop starts; the process exits with a
/// user-facing message instead of prompting.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "API key not found. Set the {var} environment variable to your API key:\n  export {var}=sk-..."
    )]
    MissingApiKey { var: String },

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message_names_the_variable() {
        let error = ConfigError::MissingApiKey {
            var: "OPENAI_API_KEY".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("OPENAI_API_KEY"));
        assert!(message.contains("export OPENAI_API_KEY="));
    }
}
