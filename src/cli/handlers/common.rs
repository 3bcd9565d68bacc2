use crate::cli::utils::{DESK_DIR, find_project_root};
use crate::config::Config;
use crate::core::TicketId;
use crate::error::{Result, TicketDeskError};
use crate::storage::{FileStorage, TicketRepository};
use std::time::Duration;
use uuid::Uuid;

/// Common context for all handler operations
#[derive(Debug)]
pub struct HandlerContext {
    pub storage: FileStorage,
    pub config: Config,
}

impl HandlerContext {
    /// Create a new handler context
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let project_root = find_project_root(project_dir)?;
        let config = Config::load_or_default(&project_root);
        let storage = FileStorage::new(project_root.join(DESK_DIR)).with_lock_settings(
            config.storage.lock_retries,
            Duration::from_millis(config.storage.lock_backoff_ms),
        );

        Ok(Self { storage, config })
    }
}

/// Resolve a ticket reference to an ID
///
/// Accepts a full UUID or a unique suffix of the ID's simple (dashless)
/// form, which is what list output shows.
pub fn resolve_ticket_ref(storage: &FileStorage, ticket_ref: &str) -> Result<TicketId> {
    // Try to parse as a full UUID first
    if let Ok(id) = Uuid::parse_str(ticket_ref) {
        return Ok(TicketId::from_uuid(id));
    }

    let needle = ticket_ref.to_lowercase();
    let mut matches: Vec<TicketId> = storage
        .load_all()?
        .into_iter()
        .filter(|t| t.id.as_uuid().simple().to_string().ends_with(&needle))
        .map(|t| t.id)
        .collect();

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(TicketDeskError::TicketNotFound {
            id: ticket_ref.to_string(),
        }),
        _ => Err(TicketDeskError::AmbiguousTicketRef {
            reference: ticket_ref.to_string(),
        }),
    }
}
