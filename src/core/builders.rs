use super::{AttachmentRef, Message, MessageId, Role, Status, Thread, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for assembling Ticket instances
///
/// Bypasses draft validation; intended for tests and for reconstructing
/// known-good data. Use [`Ticket::open`] for user input.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    subject: Option<String>,
    description: Option<String>,
    department: Option<String>,
    status: Option<Status>,
    attachment: Option<AttachmentRef>,
    created_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
    messages: Vec<Message>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the attachment reference
    #[must_use]
    pub fn attachment(mut self, attachment: AttachmentRef) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `closed_at` timestamp
    #[must_use]
    pub const fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Add a single message to the thread
    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        let mut thread = Thread::new();
        for message in self.messages {
            thread.push(message);
        }
        Ticket {
            id: self.id.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            attachment: self.attachment,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            closed_at: self.closed_at,
            thread,
        }
    }
}

/// Builder for assembling Message instances
#[derive(Default)]
pub struct MessageBuilder {
    id: Option<MessageId>,
    ticket_id: Option<TicketId>,
    author: Option<Role>,
    text: Option<String>,
    attachment: Option<AttachmentRef>,
    created_at: Option<DateTime<Utc>>,
}

impl MessageBuilder {
    /// Create a new message builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message ID
    #[must_use]
    pub fn id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the owning ticket
    #[must_use]
    pub fn ticket_id(mut self, ticket_id: TicketId) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    /// Set the author role
    #[must_use]
    pub const fn author(mut self, author: Role) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the message text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the attachment reference
    #[must_use]
    pub fn attachment(mut self, attachment: AttachmentRef) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the message
    pub fn build(self) -> Message {
        Message {
            id: self.id.unwrap_or_default(),
            ticket_id: self.ticket_id.unwrap_or_default(),
            author: self.author.unwrap_or(Role::User),
            text: self.text,
            attachment: self.attachment,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
