use crate::openrouter::Message;

/// Ordered, append-only conversation history shared by every caller
/// for the life of the process. Insertion order defines the context
/// sent to the model.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Add a turn to the end of the history.
    pub fn append(&mut self, turn: Message) {
        self.turns.push(turn);
    }

    /// Owned copy of every turn appended so far, in insertion order.
    /// Used as the `messages` field of a completion request.
    pub fn snapshot(&self) -> Vec<Message> {
        self.turns.clone()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
