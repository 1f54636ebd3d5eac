//! Append-only store for the visible conversation.

use crate::ChatTurn;

/// Ordered list of visible chat turns for one session.
///
/// Plain unbounded storage with a single logical writer; turns are
/// immutable once appended and ordering is insertion order.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn at the end. Always succeeds; no truncation.
    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Clear the history. The next render re-seeds the persona turn.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Read-only snapshot in insertion order.
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
