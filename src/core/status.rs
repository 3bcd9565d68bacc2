//! Ticket lifecycle status
//!
//! A ticket starts `Open` and can make exactly one transition, to `Closed`.
//! The transition is monotonic: a closed ticket never reopens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Accepting messages; the initial state
    Open,
    /// Terminal state; the thread no longer accepts messages
    Closed,
}

impl Status {
    /// Whether the ticket still accepts mutations
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether `self -> target` is a legal transition
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!((self, target), (Self::Open, Self::Closed))
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Open
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Unknown status: '{s}' (expected open or closed)")),
        }
    }
}
