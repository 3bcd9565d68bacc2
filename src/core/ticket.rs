//! Ticket model and lifecycle
//!
//! A ticket owns its message thread and enforces the lifecycle rules: it is
//! created `Open`, accepts appended messages only while open, and makes a
//! single monotonic transition to `Closed`.

use super::{AttachmentRef, Message, MessageDraft, Status, Thread, TicketId};
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support request with a lifecycle status and an attached message thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, assigned at creation
    pub id: TicketId,
    /// Short summary of the request; immutable after creation
    pub subject: String,
    /// Full description of the request; immutable after creation
    pub description: String,
    /// Classification tag, e.g. "Support" or "Billing"
    pub department: String,
    /// Lifecycle status
    pub status: Status,
    /// Optional attachment supplied when the ticket was opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentRef>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Set exactly once, when the ticket is closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// The conversation thread; empty at creation
    #[serde(default)]
    pub thread: Thread,
}

/// Payload for opening a new ticket
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub subject: String,
    pub description: String,
    pub department: String,
    pub attachment: Option<AttachmentRef>,
}

impl TicketDraft {
    /// Create a draft, trimming the text fields
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        description: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into().trim().to_string(),
            description: description.into().trim().to_string(),
            department: department.into().trim().to_string(),
            attachment: None,
        }
    }

    /// Attach a reference to the draft
    #[must_use]
    pub fn with_attachment(mut self, attachment: Option<AttachmentRef>) -> Self {
        self.attachment = attachment;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.subject.is_empty() {
            return Err(TicketDeskError::InvalidTicket {
                reason: "subject must not be empty".to_string(),
            });
        }
        if self.description.is_empty() {
            return Err(TicketDeskError::InvalidTicket {
                reason: "description must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Ticket {
    /// Open a new ticket from a draft
    ///
    /// Validates the required text fields, assigns the ID and creation
    /// timestamp, and starts with an empty thread.
    pub fn open(draft: TicketDraft) -> Result<Self> {
        draft.validate()?;
        Ok(Self {
            id: TicketId::new(),
            subject: draft.subject,
            description: draft.description,
            department: draft.department,
            status: Status::Open,
            attachment: draft.attachment,
            created_at: Utc::now(),
            closed_at: None,
            thread: Thread::new(),
        })
    }

    /// Whether the ticket still accepts messages
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Transition the ticket to `Closed`
    ///
    /// Rejects a repeated close with `InvalidTransition` rather than
    /// silently accepting it; callers are expected to check status first.
    pub fn close(&mut self) -> Result<()> {
        if !self.status.can_transition_to(Status::Closed) {
            return Err(TicketDeskError::InvalidTransition {
                id: self.id.to_string(),
            });
        }
        self.status = Status::Closed;
        self.closed_at = Some(Utc::now());
        Ok(())
    }

    /// Append a message to the thread
    ///
    /// Fails with `TicketClosed` once the ticket is closed and with
    /// `InvalidMessage` for an empty payload; in both cases the thread is
    /// untouched. Returns the created message.
    pub fn append_message(&mut self, draft: MessageDraft) -> Result<Message> {
        if !self.is_open() {
            return Err(TicketDeskError::TicketClosed {
                id: self.id.to_string(),
            });
        }
        let message = Message::from_draft(self.id.clone(), draft)?;
        self.thread.push(message.clone());
        Ok(message)
    }
}
