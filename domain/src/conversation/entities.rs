//! Conversation domain entities

use crate::core::error::InvalidRoleError;
use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(InvalidRoleError(other.to_string())),
        }
    }
}

/// One role-tagged message in a conversation (Entity)
///
/// Immutable once appended to a [`Conversation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// Ordered, append-only sequence of turns for one session (Entity)
///
/// Mutated only through [`append`](Conversation::append) and
/// [`clear`](Conversation::clear); turns are never reordered or removed
/// piecewise. Unbounded for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one turn to the end of the sequence.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Add one turn from a raw role name and text.
    pub fn append_parts(&mut self, role: &str, text: impl Into<String>) -> Result<(), InvalidRoleError> {
        let role: Role = role.parse()?;
        self.append(Turn::new(role, text));
        Ok(())
    }

    /// Empty the sequence. Irreversible.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Read-only view of the current turns, in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Independent copy of the current turns, in insertion order.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
