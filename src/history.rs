//! Bounded conversation history.
//!
//! The history window is the only memory the client keeps between turns: the
//! remote API is stateless, so every call re-sends the window as context. The
//! window is bounded by turn count, not tokens.

use std::collections::VecDeque;

use crate::types::Turn;

/// A capacity-bounded, ordered collection of past turns.
///
/// Appending at capacity evicts the oldest turn. Insertion order is
/// semantically meaningful: it is the order turns appear in the prompt,
/// oldest first. The capacity is fixed at construction; a capacity of zero
/// means no context is ever retained.
#[derive(Debug, Clone)]
pub struct History {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl History {
    /// Creates an empty history bounded at `capacity` turns.
    pub fn new(capacity: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a turn, evicting the oldest if the window is full.
    ///
    /// Always succeeds. With capacity zero the turn is dropped outright.
    pub fn append(&mut self, turn: Turn) {
        if self.capacity == 0 {
            return;
        }
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Iterates the retained turns in insertion (oldest-first) order.
    pub fn snapshot(&self) -> impl Iterator<Item = &Turn> + '_ {
        self.turns.iter()
    }

    /// Returns the number of retained turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if no turns are retained.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the fixed capacity of the window.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(n: usize) -> Turn {
        Turn::new(format!("q{n}"), format!("a{n}"))
    }

    #[test]
    fn empty_at_start() {
        let history = History::new(3);
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.capacity(), 3);
        assert_eq!(history.snapshot().count(), 0);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut history = History::new(3);
        history.append(turn(1));
        history.append(turn(2));
        let users: Vec<_> = history.snapshot().map(|t| t.user_text.as_str()).collect();
        assert_eq!(users, vec!["q1", "q2"]);
    }

    #[test]
    fn eviction_is_fifo() {
        let mut history = History::new(2);
        history.append(turn(1));
        history.append(turn(2));
        history.append(turn(3));
        assert_eq!(history.len(), 2);
        let users: Vec<_> = history.snapshot().map(|t| t.user_text.as_str()).collect();
        assert_eq!(users, vec!["q2", "q3"]);
    }

    #[test]
    fn capacity_zero_retains_nothing() {
        let mut history = History::new(0);
        history.append(turn(1));
        history.append(turn(2));
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 0);
    }

    #[test]
    fn window_holds_min_of_appends_and_capacity() {
        for capacity in 0..5usize {
            for appends in 0..8usize {
                let mut history = History::new(capacity);
                for n in 0..appends {
                    history.append(turn(n));
                }
                assert_eq!(history.len(), appends.min(capacity));
                // The retained turns are the most recent, in append order.
                let expected: Vec<_> = (appends.saturating_sub(capacity)..appends)
                    .map(|n| format!("q{n}"))
                    .collect();
                let actual: Vec<_> = history.snapshot().map(|t| t.user_text.clone()).collect();
                assert_eq!(actual, expected);
            }
        }
    }
}
