//! Append-only message threads

use super::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The ordered, append-only sequence of messages belonging to one ticket
///
/// Messages are kept in insertion order. Appends assign `Utc::now()`, so
/// insertion order and timestamp order agree; [`Thread::messages`] applies a
/// stable sort by `created_at` anyway, which preserves insertion order for
/// equal timestamps and repairs ordering of externally-assembled data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thread {
    entries: Vec<Message>,
}

impl Thread {
    /// An empty thread
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message at the end of the thread
    ///
    /// Status gating lives on the owning ticket; the thread itself only
    /// guarantees ordering and append-only growth.
    pub(crate) fn push(&mut self, message: Message) {
        self.entries.push(message);
    }

    /// Messages in `created_at` order, ties broken by insertion order
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        let mut ordered = self.entries.clone();
        ordered.sort_by_key(|m| m.created_at);
        ordered
    }

    /// Number of messages in the thread
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the thread has no messages yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate messages in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Timestamp of the most recent message, if any
    #[must_use]
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|m| m.created_at).max()
    }
}
