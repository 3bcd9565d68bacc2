//! Messages within a ticket thread

use super::{AttachmentRef, MessageId, Role, TicketId};
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of a ticket's conversation thread
///
/// Messages are immutable once created and are never deleted; the thread is
/// a log, not an editable document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier
    pub id: MessageId,
    /// The ticket this message belongs to
    pub ticket_id: TicketId,
    /// Which side wrote the message
    pub author: Role,
    /// Message body; absent for attachment-only messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Optional attachment reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentRef>,
    /// When the message was appended
    pub created_at: DateTime<Utc>,
}

/// Payload for a message before it is appended to a thread
///
/// Drafts carry no identity or timestamp; those are assigned at append
/// time. A draft must carry text, an attachment, or both.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub author: Role,
    pub text: Option<String>,
    pub attachment: Option<AttachmentRef>,
}

impl MessageDraft {
    /// Create a draft, normalising blank text to `None`
    #[must_use]
    pub fn new(author: Role, text: Option<String>, attachment: Option<AttachmentRef>) -> Self {
        let text = text.and_then(|t| {
            let trimmed = t.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });
        Self {
            author,
            text,
            attachment,
        }
    }

    /// Check the at-least-one-of-text-or-attachment invariant
    pub fn validate(&self) -> Result<()> {
        if self.text.is_none() && self.attachment.is_none() {
            return Err(TicketDeskError::InvalidMessage {
                reason: "a message needs text, an attachment, or both".to_string(),
            });
        }
        Ok(())
    }
}

impl Message {
    /// Materialise a draft into a message for the given ticket
    ///
    /// Assigns the ID and timestamp. Fails with `InvalidMessage` when the
    /// draft carries neither text nor attachment.
    pub fn from_draft(ticket_id: TicketId, draft: MessageDraft) -> Result<Self> {
        draft.validate()?;
        Ok(Self {
            id: MessageId::new(),
            ticket_id,
            author: draft.author,
            text: draft.text,
            attachment: draft.attachment,
            created_at: Utc::now(),
        })
    }
}
