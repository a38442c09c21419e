//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::config::error::ConfigError;
use parley_application::GenerationParams;
use parley_domain::Model;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Chat session settings
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

/// Provider configuration from TOML (`[provider]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the completion API.
    pub base_url: String,
    /// Model identifier. Falls back to the built-in default when unset.
    pub model: Option<String>,
    /// Max tokens per reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: None,
            max_tokens: 200,
            temperature: 0.7,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API credential: a direct `api_key` entry wins, otherwise
    /// the environment variable named by `api_key_env` is read. Absence is
    /// fatal.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.api_key.as_deref() {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }

        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                var: self.api_key_env.clone(),
            })
    }

    /// Generation parameters derived from this section.
    pub fn generation_params(&self) -> GenerationParams {
        let model = self
            .model
            .as_deref()
            .map(Model::from)
            .unwrap_or_default();

        GenerationParams::default()
            .with_model(model)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
    }
}

/// Chat configuration from TOML (`[chat]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Display name used when echoing replies
    pub assistant_name: String,
    /// System prompt prepended to every request
    pub system_prompt: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Assistant".to_string(),
            system_prompt: "You are a helpful AI assistant.".to_string(),
        }
    }
}

/// REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a request is in flight
    pub show_progress: bool,
    /// Path to the input-line history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
