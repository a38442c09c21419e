//! Inbound message adapter
//!
//! Normalizes heterogeneous inbound message shapes into [`Turn`]s suitable
//! for submission to the completion service. Callers resolve each message
//! into one of the two [`InboundMessage`] constructors up front; the adapter
//! itself is a pure function of its input.

use crate::conversation::entities::{Role, Turn};
use crate::core::error::InvalidInputError;
use serde_json::Value;

/// A message as it arrives from a caller, before normalization.
///
/// Either bare text, or a tagged value carrying an optional origin (`source`)
/// and an optional content payload of any JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    PlainText(String),
    Sourced {
        source: Option<String>,
        content: Option<Value>,
    },
}

impl InboundMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    pub fn sourced(source: impl Into<String>, content: impl Into<Value>) -> Self {
        Self::Sourced {
            source: Some(source.into()),
            content: Some(content.into()),
        }
    }

    pub fn unsourced(content: impl Into<Value>) -> Self {
        Self::Sourced {
            source: None,
            content: Some(content.into()),
        }
    }
}

/// Normalize a batch of inbound messages into turns.
///
/// Messages with absent or empty content are dropped silently; only a fully
/// empty result is an error. The role is derived from `source` (`"user"` and
/// `"assistant"` map to their roles, anything else defaults to system).
/// Non-string content is stringified.
pub fn adapt(messages: Vec<InboundMessage>) -> Result<Vec<Turn>, InvalidInputError> {
    let turns: Vec<Turn> = messages.into_iter().filter_map(normalize).collect();

    if turns.is_empty() {
        return Err(InvalidInputError::NoValidMessages);
    }

    Ok(turns)
}

/// Normalize a single message, or drop it when it has no usable content.
fn normalize(message: InboundMessage) -> Option<Turn> {
    match message {
        InboundMessage::PlainText(text) => {
            if text.is_empty() {
                None
            } else {
                // No source to inspect, so the default role applies.
                Some(Turn::new(Role::System, text))
            }
        }
        InboundMessage::Sourced { source, content } => {
            let text = content.and_then(content_text)?;
            if text.is_empty() {
                return None;
            }
            let role = source
                .as_deref()
                .and_then(|s| s.parse::<Role>().ok())
                .unwrap_or(Role::System);
            Some(Turn::new(role, text))
        }
    }
}

/// Coerce a content payload to text. `Null` counts as absent.
fn content_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_sourced_message_yields_user_turn() {
        let turns = adapt(vec![InboundMessage::sourced("user", "hello there")]).unwrap();
        assert_eq!(turns, vec![Turn::user("hello there")]);
    }

    #[test]
    fn test_assistant_sourced_message_yields_assistant_turn() {
        let turns = adapt(vec![InboundMessage::sourced("assistant", "hi")]).unwrap();
        assert_eq!(turns, vec![Turn::assistant("hi")]);
    }

    #[test]
    fn test_missing_source_defaults_to_system() {
        let turns = adapt(vec![InboundMessage::unsourced("hi")]).unwrap();
        assert_eq!(turns, vec![Turn::system("hi")]);
    }

    #[test]
    fn test_unknown_source_defaults_to_system() {
        let turns = adapt(vec![InboundMessage::sourced("scheduler", "tick")]).unwrap();
        assert_eq!(turns, vec![Turn::system("tick")]);
    }

    #[test]
    fn test_plain_text_defaults_to_system() {
        let turns = adapt(vec![InboundMessage::plain("note")]).unwrap();
        assert_eq!(turns, vec![Turn::system("note")]);
    }

    #[test]
    fn test_all_empty_content_is_an_error() {
        let result = adapt(vec![
            InboundMessage::sourced("user", ""),
            InboundMessage::Sourced {
                source: Some("user".to_string()),
                content: None,
            },
            InboundMessage::sourced("assistant", Value::Null),
            InboundMessage::plain(""),
        ]);
        assert_eq!(result, Err(InvalidInputError::NoValidMessages));
    }

    #[test]
    fn test_empty_messages_are_dropped_not_errors() {
        let turns = adapt(vec![
            InboundMessage::sourced("user", ""),
            InboundMessage::sourced("user", "kept"),
        ])
        .unwrap();
        assert_eq!(turns, vec![Turn::user("kept")]);
    }

    #[test]
    fn test_empty_input_list_is_an_error() {
        assert_eq!(adapt(vec![]), Err(InvalidInputError::NoValidMessages));
    }

    #[test]
    fn test_non_string_content_is_stringified() {
        let turns = adapt(vec![
            InboundMessage::sourced("user", json!(42)),
            InboundMessage::sourced("user", json!({"k": "v"})),
        ])
        .unwrap();
        assert_eq!(turns[0], Turn::user("42"));
        assert_eq!(turns[1], Turn::user(r#"{"k":"v"}"#));
    }

    #[test]
    fn test_order_is_preserved() {
        let turns = adapt(vec![
            InboundMessage::sourced("user", "first"),
            InboundMessage::sourced("assistant", "second"),
            InboundMessage::sourced("user", "third"),
        ])
        .unwrap();
        let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(turns[2].text, "third");
    }
}
