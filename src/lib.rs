//! ticket-desk - A lightweight support-ticket tracker
//!
//! This crate models a helpdesk's core: users open tickets, exchange
//! threaded messages (with optional attachments) with administrators, and
//! both sides see aggregate counts and a notification feed derived from
//! ticket activity.
//!
//! - Tickets are created `OPEN` and make a single, monotonic transition to
//!   `CLOSED`; a closed ticket's thread rejects further messages.
//! - Threads are append-only logs ordered by timestamp.
//! - Notifications are a pure projection of the ticket collections for a
//!   viewer role; nothing is stored, so counts can never go stale.
//!
//! Storage writes per ticket are serialized through lock files with retry,
//! so concurrent close/append races resolve deterministically.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_desk::core::{MessageDraft, Role, TicketDraft};
//! use ticket_desk::storage::{FileStorage, TicketStore};
//!
//! let storage = FileStorage::new(".ticket-desk");
//! let ticket = storage.create_ticket(TicketDraft::new(
//!     "Login issue",
//!     "Can't log in since the update",
//!     "Support",
//! ))?;
//!
//! storage.append_message(
//!     &ticket.id,
//!     MessageDraft::new(Role::User, Some("Still broken".into()), None),
//! )?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
