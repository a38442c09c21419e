//! Completion gateway implementation for OpenAI-compatible APIs

use crate::config::FileProviderConfig;
use crate::openai::protocol::{
    ChatCompletionRequest, ChatCompletionResponse, ErrorResponse, extract_reply,
};
use async_trait::async_trait;
use parley_application::{CompletionError, CompletionGateway, GenerationParams};
use parley_domain::Turn;
use tracing::debug;

/// Gateway speaking the OpenAI chat-completions protocol over HTTPS.
///
/// Issues exactly one outbound request per [`complete`](CompletionGateway::complete)
/// invocation. Failures are surfaced to the caller untried.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGateway {
    pub fn new(provider: &FileProviderConfig, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Extract a human-readable message from an error response body, falling
/// back to the raw body when it is not the structured envelope.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(
        &self,
        messages: &[Turn],
        params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest::new(messages, params);

        debug!(
            model = %params.model,
            messages = messages.len(),
            "calling chat completions endpoint"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| CompletionError::Transport(e.to_string()))?;
            return Err(CompletionError::Service {
                status: status.as_u16(),
                message: service_error_message(&body),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        extract_reply(completion)
    }
}
