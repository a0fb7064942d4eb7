use serde::Serialize;
use std::collections::VecDeque;

/// Number of normalized turns kept for the context bonus.
pub const CONTEXT_CAPACITY: usize = 3;

/// Short-term memory of the current session.
///
/// `context` holds at most [`CONTEXT_CAPACITY`] token sets, oldest first.
/// `last_input`/`last_tokens` are kept for inspection only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationMemory {
    last_input: String,
    last_tokens: Vec<String>,
    context: VecDeque<Vec<String>>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a turn and evicts the oldest one past capacity.
    pub fn record(&mut self, input: &str, tokens: &[String]) {
        self.last_input = input.to_string();
        self.last_tokens = tokens.to_vec();
        self.context.push_back(tokens.to_vec());

        while self.context.len() > CONTEXT_CAPACITY {
            self.context.pop_front();
        }
    }

    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    pub fn last_tokens(&self) -> &[String] {
        &self.last_tokens
    }

    /// All remembered turns, oldest first, including the latest.
    pub fn context(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        self.context.iter().map(Vec::as_slice)
    }

    /// Remembered turns before the latest one.
    pub fn prior_turns(&self) -> impl Iterator<Item = &[String]> + '_ {
        let prior = self.context.len().saturating_sub(1);
        self.context.iter().take(prior).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.context.len()
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
