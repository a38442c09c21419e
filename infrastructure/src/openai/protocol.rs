//! Wire types for the `/v1/chat/completions` endpoint.
//!
//! These structs mirror the JSON bodies exchanged with an OpenAI-compatible
//! completion service. [`extract_reply`] is the pure counterpart of the
//! response handling in [`gateway`](super::gateway): it consumes only the
//! first candidate choice and rejects empty content.

use parley_application::{CompletionError, GenerationParams};
use parley_domain::{Role, Turn};
use serde::{Deserialize, Serialize};

/// Request body for a chat completion call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    pub fn new(turns: &[Turn], params: &GenerationParams) -> Self {
        Self {
            model: params.model.to_string(),
            messages: turns.iter().map(WireMessage::from).collect(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

/// One `{role, content}` pair on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Turn> for WireMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.text.clone(),
        }
    }
}

/// Response body for a successful chat completion call.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

/// The assistant message inside a candidate choice. `content` can be null.
#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

/// Structured error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    #[serde(default)]
    pub kind: Option<String>,
}

/// Take the first candidate's text content, rejecting empty replies.
///
/// Additional candidates are ignored even when the service returns more
/// than one.
pub fn extract_reply(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(CompletionError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_ordered_role_content_pairs() {
        let turns = vec![
            Turn::system("Be helpful."),
            Turn::user("Hello"),
            Turn::assistant("Hi!"),
            Turn::user("How are you?"),
        ];
        let params = GenerationParams::default();
        let request = ChatCompletionRequest::new(&turns, &params);

        // Through the string writer, where f32 gets its shortest form.
        let encoded = serde_json::to_string(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "Be helpful."},
                    {"role": "user", "content": "Hello"},
                    {"role": "assistant", "content": "Hi!"},
                    {"role": "user", "content": "How are you?"},
                ],
                "max_tokens": 200,
                "temperature": 0.7,
            })
        );
    }

    #[test]
    fn test_parse_response_and_extract_reply() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hello!"}, "finish_reason": "stop"},
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3},
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(extract_reply(response).unwrap(), "Hello!");
    }

    #[test]
    fn test_only_first_choice_is_consumed() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}},
            ],
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(extract_reply(response).unwrap(), "first");
    }

    #[test]
    fn test_no_choices_is_empty_reply() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(CompletionError::EmptyReply)
        ));
    }

    #[test]
    fn test_null_or_empty_content_is_empty_reply() {
        for content in [json!(null), json!("")] {
            let body = json!({"choices": [{"message": {"role": "assistant", "content": content}}]});
            let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
            assert!(matches!(
                extract_reply(response),
                Err(CompletionError::EmptyReply)
            ));
        }
    }

    #[test]
    fn test_parse_error_envelope() {
        let body = json!({
            "error": {
                "message": "You exceeded your current quota.",
                "type": "insufficient_quota",
            }
        });

        let parsed: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.error.message, "You exceeded your current quota.");
        assert_eq!(parsed.error.kind.as_deref(), Some("insufficient_quota"));
    }
}
