//! Conversation session management.
//!
//! `Transcript` holds the visible turns, `ChatSession` owns the hidden
//! remote context, and `ChatEngine` ties both together with the turn and
//! reset logic.

mod engine;
mod handle;
mod priming;
mod transcript;

pub use engine::{ChatEngine, SessionFactory, TurnOutcome, EMPTY_REPLY_MESSAGE};
pub use handle::ChatSession;
pub use priming::{PRIMING_ACK, PRIMING_INSTRUCTION};
pub use transcript::Transcript;
