//! Storage layer
//!
//! The store is the serialization boundary for ticket mutations: all writes
//! to one ticket go through a per-ticket lock, reads take none.

mod file;
mod lock;
mod repository;

pub use file::{FileStorage, ProjectState};
pub use repository::{TicketRepository, TicketStore};
