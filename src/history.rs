//! Dialogue history: bounded per-session transcript
//!
//! Keeps the most recent N turns (user/assistant), evicting the oldest when at
//! capacity. One instance per web session; the caller owns synchronization.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Turn author (mirrors the chat API roles)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A single recorded turn. Immutable once added.
#[derive(Clone, Debug)]
pub struct Turn {
    pub role: Role,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Bounded FIFO transcript: length never exceeds `max_turns`, order is
/// chronological.
#[derive(Clone, Debug)]
pub struct DialogueHistory {
    turns: VecDeque<Turn>,
    max_turns: usize,
}

impl DialogueHistory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_turns),
            max_turns,
        }
    }

    /// Append a turn stamped with the current time, dropping the oldest one
    /// when at capacity.
    pub fn add(&mut self, role: Role, message: impl Into<String>) {
        if self.turns.len() == self.max_turns {
            self.turns.pop_front();
        }
        self.turns.push_back(Turn {
            role,
            message: message.into(),
            timestamp: Local::now(),
        });
    }

    /// Owned copy of the transcript as of this call; later mutations of the
    /// history do not leak into the returned vector.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}
