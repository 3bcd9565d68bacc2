//! Derived activity notifications
//!
//! Notifications are a pure projection of the ticket/message collections
//! for a given viewer role. Nothing here holds state: deriving twice from
//! the same tickets yields byte-identical feeds, IDs included, so counts
//! shown to users can never drift from the data they describe.

use super::{NotificationId, Role, Ticket, TicketId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A read-only summary of one activity event, addressed to a viewer role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Derived identifier, stable across re-derivations
    pub id: NotificationId,
    /// The ticket the activity happened on
    pub ticket_id: TicketId,
    /// Human-readable summary
    pub message: String,
    /// Timestamp of the source event
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(
        source: &uuid::Uuid,
        ticket_id: TicketId,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::from_source(source),
            ticket_id,
            message,
            created_at,
        }
    }
}

/// Derive the notification feed for a viewer role, newest first
///
/// Source events per viewer:
/// - `Admin` sees one entry per ticket creation and one per user-authored
///   message.
/// - `User` sees one entry per admin-authored message on their tickets.
///
/// Closing a ticket produces no feed entry; the transition is observable
/// through `status` and `closed_at` instead.
#[must_use]
pub fn derive_notifications(tickets: &[Ticket], viewer: Role) -> Vec<Notification> {
    // Order the walk by (created_at, id) so the feed does not depend on
    // whatever order the store handed the tickets back in.
    let mut ordered: Vec<&Ticket> = tickets.iter().collect();
    ordered.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });

    let mut feed = Vec::new();
    for ticket in ordered {
        if viewer == Role::Admin {
            feed.push(Notification::new(
                ticket.id.as_uuid(),
                ticket.id.clone(),
                format!("New ticket opened: \"{}\"", ticket.subject),
                ticket.created_at,
            ));
        }

        for message in ticket.thread.iter() {
            if message.author.counterpart() != viewer {
                continue;
            }
            let summary = match message.author {
                Role::User => format!("New message from user on \"{}\"", ticket.subject),
                Role::Admin => format!("New reply from support on \"{}\"", ticket.subject),
            };
            feed.push(Notification::new(
                message.id.as_uuid(),
                ticket.id.clone(),
                summary,
                message.created_at,
            ));
        }
    }

    // Newest first; the sort is stable, so events sharing a timestamp keep
    // the deterministic derivation order.
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed
}
