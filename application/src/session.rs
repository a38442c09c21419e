//! Chat session service.
//!
//! A [`ChatSession`] owns one [`Conversation`] and drives the per-turn flow:
//! adapt inbound messages, invoke the completion service with the system
//! prompt followed by the accumulated history, and record the exchange.
//!
//! The remote API is stateless, so every invocation carries the full ordered
//! history. Adapted turns are staged outside the store and committed together
//! with the reply only when the call succeeds; a failed call leaves the
//! conversation exactly as it was, so the user can simply resend.

use crate::config::GenerationParams;
use crate::ports::completion_gateway::{CompletionError, CompletionGateway};
use parley_domain::{Conversation, InboundMessage, InvalidInputError, Turn, adapt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_NAME: &str = "Assistant";
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Errors that can occur while processing one turn.
///
/// All variants are recoverable: the caller reports them and the session
/// keeps accepting input.
#[derive(Error, Debug)]
pub enum TurnError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),
}

/// An interactive chat session (one conversation, one remote model).
pub struct ChatSession {
    name: String,
    system_prompt: String,
    params: GenerationParams,
    conversation: Conversation,
    gateway: Arc<dyn CompletionGateway>,
}

impl ChatSession {
    pub fn new(gateway: Arc<dyn CompletionGateway>, params: GenerationParams) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            params,
            conversation: Conversation::new(),
            gateway,
        }
    }

    /// Set the display name used when echoing replies.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the system prompt prepended to every request.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Send one line of user input and return the assistant's reply.
    pub async fn send(&mut self, input: &str) -> Result<String, TurnError> {
        self.submit(vec![InboundMessage::sourced("user", input)])
            .await
    }

    /// Adapt a batch of inbound messages, submit them with the accumulated
    /// history, and record the exchange on success.
    pub async fn submit(&mut self, inbound: Vec<InboundMessage>) -> Result<String, TurnError> {
        let staged = adapt(inbound)?;

        // System prompt first, then history, then the turns being sent now.
        let mut outbound = Vec::with_capacity(self.conversation.len() + staged.len() + 1);
        outbound.push(Turn::system(self.system_prompt.clone()));
        outbound.extend_from_slice(self.conversation.turns());
        outbound.extend_from_slice(&staged);

        debug!(
            model = %self.params.model,
            messages = outbound.len(),
            "sending completion request"
        );

        let reply = self.gateway.complete(&outbound, &self.params).await?;

        for turn in staged {
            self.conversation.append(turn);
        }
        self.conversation.append(Turn::assistant(reply.clone()));

        info!(turns = self.conversation.len(), "turn completed");
        Ok(reply)
    }

    /// Clear the conversation history. No network call is made.
    pub fn reset(&mut self) {
        self.conversation.clear();
        info!("conversation cleared");
    }
}
