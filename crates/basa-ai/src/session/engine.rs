//! Turn controller: transcript bookkeeping around the session handle.

use tracing::warn;

use crate::gemini::GeminiConfig;
use crate::{AiError, ChatTurn};

use super::handle::ChatSession;
use super::priming::PRIMING_ACK;
use super::transcript::Transcript;

/// Fixed transcript entry for a call that succeeded without usable text.
pub const EMPTY_REPLY_MESSAGE: &str =
    "Maaf, saya tidak bisa memberikan balasan. Respons API kosong atau tidak valid.";

/// Transcript entry for a failed remote call, embedding the error detail.
fn call_error_message(err: &AiError) -> String {
    format!("Maaf, terjadi kesalahan saat berkomunikasi dengan Gemini:\n\nDetail: {err}")
}

/// Produces a fresh session handle. Failures are fatal configuration
/// errors; the engine never retries them.
pub type SessionFactory = Box<dyn Fn() -> Result<ChatSession, AiError> + Send>;

/// What one submission did to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty; nothing was appended.
    Ignored,
    /// The model replied and the reply was appended.
    Replied,
    /// The call failed or returned nothing; a placeholder model turn was
    /// appended and the shell should surface `warning` as a notice.
    Degraded { warning: String },
    /// Initialization failed; no further input is accepted until restart
    /// or reset.
    Fatal { error: String },
}

/// Drives one conversation: owns the transcript and the session handle,
/// and recreates the handle after `reset`.
///
/// The handle is built lazily through the injected factory, so tests can
/// swap in scripted clients and the (slow, credentialed) Gemini setup runs
/// at most once per session.
pub struct ChatEngine {
    transcript: Transcript,
    session: Option<ChatSession>,
    factory: SessionFactory,
    fatal: Option<String>,
}

impl ChatEngine {
    pub fn new(factory: SessionFactory) -> Self {
        Self {
            transcript: Transcript::new(),
            session: None,
            factory,
            fatal: None,
        }
    }

    /// Engine backed by the Gemini API with the given configuration.
    pub fn gemini(config: GeminiConfig) -> Self {
        Self::new(Box::new(move || ChatSession::start_gemini(config.clone())))
    }

    /// Handle one user submission end to end.
    ///
    /// The user's turn is appended before the remote call so it stays
    /// visible even when the call fails, and every recoverable failure is
    /// absorbed into a placeholder model turn rather than propagated.
    /// Exactly one model turn lands per accepted submission, no retries.
    pub async fn submit(&mut self, text: &str) -> TurnOutcome {
        let text = text.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored;
        }

        if let Some(error) = &self.fatal {
            return TurnOutcome::Fatal {
                error: error.clone(),
            };
        }

        // Take ownership of the handle for the duration of the call; the
        // turn-by-turn interaction model means nothing else can need it.
        let mut session = match self.session.take() {
            Some(session) => session,
            None => match (self.factory)() {
                Ok(session) => session,
                Err(err) => {
                    warn!("session initialization failed: {err}");
                    let error = err.to_string();
                    self.fatal = Some(error.clone());
                    return TurnOutcome::Fatal { error };
                }
            },
        };

        self.seed_if_empty();
        self.transcript.append(ChatTurn::user(text));

        let result = session.send(text).await;
        self.session = Some(session);

        match result {
            Ok(reply) => {
                self.transcript.append(ChatTurn::model(reply));
                TurnOutcome::Replied
            }
            Err(AiError::EmptyResponse) => {
                warn!("remote call returned no usable text");
                self.transcript.append(ChatTurn::model(EMPTY_REPLY_MESSAGE));
                TurnOutcome::Degraded {
                    warning: EMPTY_REPLY_MESSAGE.to_string(),
                }
            }
            Err(err) if err.is_fatal() => {
                warn!("session became unusable: {err}");
                let error = err.to_string();
                self.fatal = Some(error.clone());
                TurnOutcome::Fatal { error }
            }
            Err(err) => {
                warn!("remote call failed: {err}");
                let warning = call_error_message(&err);
                self.transcript.append(ChatTurn::model(warning.clone()));
                TurnOutcome::Degraded { warning }
            }
        }
    }

    /// Render snapshot; seeds the persona acknowledgment first if the
    /// transcript is empty (fresh session or just after `reset`).
    pub fn turns(&mut self) -> &[ChatTurn] {
        self.seed_if_empty();
        self.transcript.all()
    }

    /// Read-only view of the store without the lazy reseed.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Start a new topic: clear the transcript and drop the session handle
    /// so the next turn re-runs initialization and re-primes the remote
    /// context. This is the only way to truncate history.
    pub fn reset(&mut self) {
        self.transcript.reset();
        self.session = None;
        self.fatal = None;
    }

    fn seed_if_empty(&mut self) {
        if self.transcript.is_empty() {
            self.transcript.append(ChatTurn::model(PRIMING_ACK));
        }
    }
}
