//! Opaque attachment references
//!
//! The tracker never holds attachment bytes. An [`AttachmentRef`] is an
//! opaque handle (a URL, an object key) that some collaborator outside this
//! crate resolves to content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a binary resource stored outside the tracker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentRef(String);

impl AttachmentRef {
    /// Create a reference, rejecting empty input
    ///
    /// Returns `None` when the trimmed reference is empty, so callers can
    /// treat blank CLI arguments as "no attachment".
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Option<Self> {
        let reference = reference.into();
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The reference string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_references() {
        assert!(AttachmentRef::new("").is_none());
        assert!(AttachmentRef::new("   ").is_none());
    }

    #[test]
    fn test_trims_and_keeps_reference() {
        let a = AttachmentRef::new("  uploads/screenshot.png ").unwrap();
        assert_eq!(a.as_str(), "uploads/screenshot.png");
    }
}
