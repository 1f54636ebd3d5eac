//! Session handle owning the remote conversation context.

use tracing::debug;

use crate::gemini::{GeminiClient, GeminiConfig};
use crate::{AiClient, AiError, ChatTurn};

use super::priming::priming_context;

/// A live handle to one remote conversation.
///
/// Owns the hidden context (priming pair plus committed exchanges) sent
/// with every call. An exchange is committed only after a successful,
/// non-empty reply, so a failed call never pollutes the remote context.
pub struct ChatSession {
    client: Box<dyn AiClient>,
    context: Vec<ChatTurn>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("context", &self.context)
            .finish()
    }
}

impl ChatSession {
    /// Open a session over any client, seeded with the persona priming pair.
    pub fn start(client: Box<dyn AiClient>) -> Self {
        Self {
            client,
            context: priming_context(),
        }
    }

    /// Run the full initialization ladder against the Gemini API: credential
    /// check, client configuration, model binding, then a seeded session.
    /// Any failure here is fatal for the session.
    pub fn start_gemini(config: GeminiConfig) -> Result<Self, AiError> {
        let client = GeminiClient::new(config)?;
        Ok(Self::start(Box::new(client)))
    }

    /// Send one user message and return the model's reply.
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        let mut working = self.context.clone();
        working.push(ChatTurn::user(text));

        let reply = self.client.generate(&working).await?;
        if reply.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }

        working.push(ChatTurn::model(reply.clone()));
        self.context = working;
        debug!(turns = self.context.len(), "remote context committed");

        Ok(reply)
    }

    /// Hidden remote-context history, priming pair included.
    pub fn context(&self) -> &[ChatTurn] {
        &self.context
    }
}
