//! End-to-end ticket lifecycle scenarios through the store interface

use tempfile::TempDir;
use ticket_desk::TicketDeskError;
use ticket_desk::core::{AttachmentRef, MessageDraft, Role, Status, TicketDraft};
use ticket_desk::storage::{FileStorage, ProjectState, TicketStore};

fn setup() -> (TempDir, FileStorage) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp_dir.path().join(".ticket-desk"));
    storage
        .initialize(&ProjectState::new("flow-test", None))
        .expect("Failed to initialize storage");
    (temp_dir, storage)
}

#[test]
fn new_ticket_is_open_with_empty_thread_and_one_admin_notification() {
    let (_temp_dir, storage) = setup();

    let ticket = storage
        .create_ticket(TicketDraft::new("Login issue", "Can't log in", "Support"))
        .expect("Failed to create ticket");

    assert_eq!(ticket.status, Status::Open);
    assert!(ticket.thread.is_empty());
    assert!(storage.list_messages(&ticket.id).unwrap().is_empty());

    let admin_feed = storage.list_notifications(Role::Admin).unwrap();
    assert_eq!(admin_feed.len(), 1);
    assert_eq!(admin_feed[0].ticket_id, ticket.id);
    assert!(admin_feed[0].message.contains("Login issue"));
}

#[test]
fn user_message_grows_thread_and_notifies_admin() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("Login issue", "Can't log in", "Support"))
        .unwrap();

    storage
        .append_message(
            &ticket.id,
            MessageDraft::new(Role::User, Some("Still broken".to_string()), None),
        )
        .expect("Failed to append message");

    assert_eq!(storage.list_messages(&ticket.id).unwrap().len(), 1);
    // One creation event plus one user message
    assert_eq!(storage.list_notifications(Role::Admin).unwrap().len(), 2);
    // The user authored the message, so their own feed stays empty
    assert!(storage.list_notifications(Role::User).unwrap().is_empty());
}

#[test]
fn closed_ticket_rejects_messages_and_feed_is_unchanged() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("Login issue", "Can't log in", "Support"))
        .unwrap();
    storage.close_ticket(&ticket.id).expect("Failed to close");

    let feed_before = storage.list_notifications(Role::Admin).unwrap();

    let result = storage.append_message(
        &ticket.id,
        MessageDraft::new(Role::Admin, Some("Reopening".to_string()), None),
    );
    assert!(matches!(
        result.unwrap_err(),
        TicketDeskError::TicketClosed { .. }
    ));

    assert!(storage.list_messages(&ticket.id).unwrap().is_empty());
    assert_eq!(storage.list_notifications(Role::Admin).unwrap(), feed_before);
}

#[test]
fn repeated_close_is_an_error() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("Login issue", "Can't log in", "Support"))
        .unwrap();

    storage.close_ticket(&ticket.id).unwrap();
    let result = storage.close_ticket(&ticket.id);
    assert!(matches!(
        result.unwrap_err(),
        TicketDeskError::InvalidTransition { .. }
    ));

    // The ticket is still closed; the failed call changed nothing
    let reloaded = storage.get_ticket(&ticket.id).unwrap();
    assert_eq!(reloaded.status, Status::Closed);
}

#[test]
fn empty_subject_creates_nothing() {
    let (_temp_dir, storage) = setup();

    let result = storage.create_ticket(TicketDraft::new("", "Can't log in", "Support"));
    assert!(matches!(
        result.unwrap_err(),
        TicketDeskError::InvalidTicket { .. }
    ));
    assert!(storage.list_tickets().unwrap().is_empty());
    assert!(storage.list_notifications(Role::Admin).unwrap().is_empty());
}

#[test]
fn thread_order_is_stable_and_non_decreasing() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("Login issue", "Can't log in", "Support"))
        .unwrap();

    for (author, text) in [
        (Role::User, "first"),
        (Role::Admin, "second"),
        (Role::User, "third"),
    ] {
        storage
            .append_message(
                &ticket.id,
                MessageDraft::new(author, Some(text.to_string()), None),
            )
            .unwrap();
    }

    let messages = storage.list_messages(&ticket.id).unwrap();
    assert_eq!(messages.len(), 3);
    for pair in messages.windows(2) {
        assert!(pair[0].created_at <= pair[1].created_at);
    }
    assert_eq!(messages[0].text.as_deref(), Some("first"));
    assert_eq!(messages[2].text.as_deref(), Some("third"));

    // Idempotent read
    assert_eq!(messages, storage.list_messages(&ticket.id).unwrap());
}

#[test]
fn feed_cardinality_matches_activity() {
    let (_temp_dir, storage) = setup();

    let a = storage
        .create_ticket(TicketDraft::new("A", "details", "Support"))
        .unwrap();
    let b = storage
        .create_ticket(TicketDraft::new("B", "details", "Billing"))
        .unwrap();

    for _ in 0..2 {
        storage
            .append_message(
                &a.id,
                MessageDraft::new(Role::User, Some("ping".to_string()), None),
            )
            .unwrap();
    }
    storage
        .append_message(
            &a.id,
            MessageDraft::new(Role::Admin, Some("pong".to_string()), None),
        )
        .unwrap();
    storage
        .append_message(
            &b.id,
            MessageDraft::new(Role::Admin, Some("hello".to_string()), None),
        )
        .unwrap();

    // Admin: 2 creations + 2 user messages
    let admin_feed = storage.list_notifications(Role::Admin).unwrap();
    assert_eq!(admin_feed.len(), 4);

    // User: 2 admin messages
    let user_feed = storage.list_notifications(Role::User).unwrap();
    assert_eq!(user_feed.len(), 2);

    // Newest first, both feeds
    for feed in [&admin_feed, &user_feed] {
        for pair in feed.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

#[test]
fn feed_is_identical_across_derivations() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("A", "details", "Support"))
        .unwrap();
    storage
        .append_message(
            &ticket.id,
            MessageDraft::new(Role::User, Some("ping".to_string()), None),
        )
        .unwrap();

    let first = storage.list_notifications(Role::Admin).unwrap();
    let second = storage.list_notifications(Role::Admin).unwrap();
    assert_eq!(first, second);
}

#[test]
fn attachment_only_message_is_accepted() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(
            TicketDraft::new("Broken layout", "Page renders wrong", "Support")
                .with_attachment(AttachmentRef::new("uploads/before.png")),
        )
        .unwrap();
    assert_eq!(
        ticket.attachment.as_ref().map(AttachmentRef::as_str),
        Some("uploads/before.png")
    );

    let message = storage
        .append_message(
            &ticket.id,
            MessageDraft::new(Role::User, None, AttachmentRef::new("uploads/after.png")),
        )
        .expect("Failed to append attachment-only message");
    assert!(message.text.is_none());
    assert_eq!(message.attachment.unwrap().as_str(), "uploads/after.png");
}

#[test]
fn blank_text_without_attachment_is_rejected() {
    let (_temp_dir, storage) = setup();
    let ticket = storage
        .create_ticket(TicketDraft::new("A", "details", "Support"))
        .unwrap();

    let result = storage.append_message(
        &ticket.id,
        MessageDraft::new(Role::User, Some("   ".to_string()), None),
    );
    assert!(matches!(
        result.unwrap_err(),
        TicketDeskError::InvalidMessage { .. }
    ));
}
