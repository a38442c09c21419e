//! Generation parameters — per-request completion settings.
//!
//! [`GenerationParams`] groups the static parameters sent with every
//! completion request. These are application-layer concerns, not domain
//! policy.

use parley_domain::Model;
use serde::{Deserialize, Serialize};

/// Parameters forwarded to the completion service with each request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model identifier the request is routed to.
    pub model: Model,
    /// Maximum number of tokens in the reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: 200,
            temperature: 0.7,
        }
    }
}

impl GenerationParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
