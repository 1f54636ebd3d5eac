//! Chat engine for basa.
//!
//! Provides the Gemini API client plus the session machinery around it:
//! - A transcript store holding the visible conversation
//! - A session handle owning the hidden remote context (persona priming)
//! - A turn engine that absorbs remote failures into transcript entries
//!
//! One session maps to one remote conversation; `reset` is the only way to
//! start over.

pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{
    ChatEngine, ChatSession, SessionFactory, Transcript, TurnOutcome, EMPTY_REPLY_MESSAGE,
    PRIMING_ACK, PRIMING_INSTRUCTION,
};

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Generate the next model reply for an ordered conversation history.
    async fn generate(&self, history: &[ChatTurn]) -> Result<String, AiError>;
}

/// One message in a conversation, tagged with its speaker role.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Speaker roles, named after the Gemini wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout after {0}s")]
    Timeout(u64),
    #[error("Empty response")]
    EmptyResponse,
}

impl AiError {
    /// Fatal errors halt the session; every other error costs one turn and
    /// the conversation continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AiError::Configuration(_))
    }
}
