//! Shared CLI utilities

use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Local, Utc};
use std::path::PathBuf;

/// Name of the project storage directory
pub const DESK_DIR: &str = ".ticket-desk";

/// Find the project root by walking up from a starting directory
///
/// The project root is the closest ancestor containing a `.ticket-desk`
/// directory.
pub fn find_project_root(start: Option<&str>) -> Result<PathBuf> {
    let start = match start {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    let mut current = start.as_path();
    loop {
        if current.join(DESK_DIR).is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(TicketDeskError::ProjectNotInitialized),
        }
    }
}

/// Format a timestamp for terminal display in local time
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
