use crate::core::{
    Message, MessageDraft, Notification, Role, Ticket, TicketDraft, TicketId,
    derive_notifications,
};
use crate::error::{Result, TicketDeskError};

/// Repository trait for low-level ticket storage operations
///
/// This trait defines the interface for storing and retrieving tickets,
/// allowing for different storage implementations.
pub trait TicketRepository: Send + Sync {
    /// Saves a ticket to the repository
    fn save(&self, ticket: &Ticket) -> Result<()>;

    /// Loads a ticket by ID
    fn load(&self, id: &TicketId) -> Result<Ticket>;

    /// Loads all tickets
    fn load_all(&self) -> Result<Vec<Ticket>>;

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &TicketId) -> Result<bool>;

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool;

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> Result<usize>
    where
        F: Fn(&Ticket) -> bool;
}

/// The domain-level store contract
///
/// Every mutation here is atomic: it either fully applies or leaves the
/// store unchanged, reporting a typed error. Reads reflect the latest
/// persisted state; nothing is cached.
pub trait TicketStore: Send + Sync {
    /// Open a new ticket; rejects empty subject or description
    fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket>;

    /// Fetch one ticket
    fn get_ticket(&self, id: &TicketId) -> Result<Ticket>;

    /// All tickets, newest first
    fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Close an open ticket; a repeated close is an error
    fn close_ticket(&self, id: &TicketId) -> Result<Ticket>;

    /// Append a message to an open ticket's thread
    fn append_message(&self, id: &TicketId, draft: MessageDraft) -> Result<Message>;

    /// The ticket's thread in timestamp order
    fn list_messages(&self, id: &TicketId) -> Result<Vec<Message>>;

    /// The derived notification feed for a viewer, newest first
    fn list_notifications(&self, viewer: Role) -> Result<Vec<Notification>>;
}

use super::file::FileStorage;

impl TicketRepository for FileStorage {
    fn save(&self, ticket: &Ticket) -> Result<()> {
        self.save_ticket(ticket)
    }

    fn load(&self, id: &TicketId) -> Result<Ticket> {
        self.load_ticket(id)
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.load_all_tickets()
    }

    fn exists(&self, id: &TicketId) -> Result<bool> {
        match self.load_ticket(id) {
            Ok(_) => Ok(true),
            Err(TicketDeskError::TicketNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool,
    {
        let tickets = self.load_all_tickets()?;
        Ok(tickets.into_iter().filter(predicate).collect())
    }

    fn count<F>(&self, predicate: F) -> Result<usize>
    where
        F: Fn(&Ticket) -> bool,
    {
        let tickets = self.load_all_tickets()?;
        Ok(tickets.iter().filter(|t| predicate(t)).count())
    }
}

impl TicketStore for FileStorage {
    fn create_ticket(&self, draft: TicketDraft) -> Result<Ticket> {
        // Validation happens before anything touches disk
        let ticket = Ticket::open(draft)?;
        self.save_ticket(&ticket)?;
        tracing::info!(ticket = %ticket.id, subject = %ticket.subject, "opened ticket");
        Ok(ticket)
    }

    fn get_ticket(&self, id: &TicketId) -> Result<Ticket> {
        self.load_ticket(id)
    }

    fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let mut tickets = self.load_all_tickets()?;
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    fn close_ticket(&self, id: &TicketId) -> Result<Ticket> {
        let ticket = self.update_ticket(id, |ticket| {
            ticket.close()?;
            Ok(ticket.clone())
        })?;
        tracing::info!(ticket = %id, "closed ticket");
        Ok(ticket)
    }

    fn append_message(&self, id: &TicketId, draft: MessageDraft) -> Result<Message> {
        let message = self.update_ticket(id, |ticket| ticket.append_message(draft))?;
        tracing::info!(ticket = %id, author = %message.author, "appended message");
        Ok(message)
    }

    fn list_messages(&self, id: &TicketId) -> Result<Vec<Message>> {
        Ok(self.load_ticket(id)?.thread.messages())
    }

    fn list_notifications(&self, viewer: Role) -> Result<Vec<Notification>> {
        let tickets = self.load_all_tickets()?;
        Ok(derive_notifications(&tickets, viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::storage::ProjectState;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".ticket-desk"));
        storage
            .initialize(&ProjectState::new("test", None))
            .expect("Failed to initialize storage");
        (temp_dir, storage)
    }

    fn draft(subject: &str) -> TicketDraft {
        TicketDraft::new(subject, format!("Description for {subject}"), "Support")
    }

    #[test]
    fn test_create_and_get_ticket() {
        let (_temp_dir, storage) = setup();

        let ticket = storage
            .create_ticket(draft("Login issue"))
            .expect("Failed to create ticket");
        assert_eq!(ticket.status, Status::Open);
        assert!(ticket.thread.is_empty());

        let loaded = storage.get_ticket(&ticket.id).expect("Failed to get ticket");
        assert_eq!(loaded, ticket);
    }

    #[test]
    fn test_invalid_draft_creates_nothing() {
        let (_temp_dir, storage) = setup();

        let result = storage.create_ticket(TicketDraft::new("", "Description", "Support"));
        assert!(matches!(
            result.unwrap_err(),
            TicketDeskError::InvalidTicket { .. }
        ));
        assert!(storage.list_tickets().unwrap().is_empty());
    }

    #[test]
    fn test_list_tickets_is_newest_first() {
        let (_temp_dir, storage) = setup();

        storage.create_ticket(draft("first")).unwrap();
        storage.create_ticket(draft("second")).unwrap();
        storage.create_ticket(draft("third")).unwrap();

        let tickets = storage.list_tickets().expect("Failed to list tickets");
        assert_eq!(tickets.len(), 3);
        for pair in tickets.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_close_then_append_is_rejected() {
        let (_temp_dir, storage) = setup();
        let ticket = storage.create_ticket(draft("Login issue")).unwrap();

        storage.close_ticket(&ticket.id).expect("Failed to close");
        let result = storage.append_message(
            &ticket.id,
            MessageDraft::new(Role::Admin, Some("Reopening".to_string()), None),
        );
        assert!(matches!(
            result.unwrap_err(),
            TicketDeskError::TicketClosed { .. }
        ));
        assert!(storage.list_messages(&ticket.id).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_close_is_rejected() {
        let (_temp_dir, storage) = setup();
        let ticket = storage.create_ticket(draft("Login issue")).unwrap();

        storage.close_ticket(&ticket.id).unwrap();
        let result = storage.close_ticket(&ticket.id);
        assert!(matches!(
            result.unwrap_err(),
            TicketDeskError::InvalidTransition { .. }
        ));
    }

    #[test]
    fn test_append_message_returns_created_message() {
        let (_temp_dir, storage) = setup();
        let ticket = storage.create_ticket(draft("Login issue")).unwrap();

        let message = storage
            .append_message(
                &ticket.id,
                MessageDraft::new(Role::User, Some("Still broken".to_string()), None),
            )
            .expect("Failed to append message");
        assert_eq!(message.ticket_id, ticket.id);

        let messages = storage.list_messages(&ticket.id).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, message.id);
    }

    #[test]
    fn test_unknown_ticket_operations_fail_with_not_found() {
        let (_temp_dir, storage) = setup();
        let unknown = TicketId::new();

        assert!(matches!(
            storage.get_ticket(&unknown).unwrap_err(),
            TicketDeskError::TicketNotFound { .. }
        ));
        assert!(matches!(
            storage.close_ticket(&unknown).unwrap_err(),
            TicketDeskError::TicketNotFound { .. }
        ));
        assert!(matches!(
            storage
                .append_message(
                    &unknown,
                    MessageDraft::new(Role::User, Some("hi".to_string()), None)
                )
                .unwrap_err(),
            TicketDeskError::TicketNotFound { .. }
        ));
    }

    #[test]
    fn test_find_and_count_by_predicate() {
        let (_temp_dir, storage) = setup();
        let open = storage.create_ticket(draft("open")).unwrap();
        let closed = storage.create_ticket(draft("closed")).unwrap();
        storage.close_ticket(&closed.id).unwrap();

        let found = storage
            .find(|t| t.status == Status::Open)
            .expect("Failed to find tickets");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, open.id);

        let open_count = storage
            .count(|t| t.is_open())
            .expect("Failed to count tickets");
        assert_eq!(open_count, 1);
    }

    #[test]
    fn test_exists() {
        let (_temp_dir, storage) = setup();
        let ticket = storage.create_ticket(draft("here")).unwrap();

        assert!(storage.exists(&ticket.id).unwrap());
        assert!(!storage.exists(&TicketId::new()).unwrap());
    }

    #[test]
    fn test_notifications_reflect_store_state() {
        let (_temp_dir, storage) = setup();
        let ticket = storage.create_ticket(draft("Login issue")).unwrap();

        let admin_feed = storage.list_notifications(Role::Admin).unwrap();
        assert_eq!(admin_feed.len(), 1);

        storage
            .append_message(
                &ticket.id,
                MessageDraft::new(Role::User, Some("Still broken".to_string()), None),
            )
            .unwrap();

        let admin_feed = storage.list_notifications(Role::Admin).unwrap();
        assert_eq!(admin_feed.len(), 2);

        let user_feed = storage.list_notifications(Role::User).unwrap();
        assert!(user_feed.is_empty());
    }
}
