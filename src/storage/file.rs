//! File-backed ticket storage
//!
//! Tickets are stored one YAML file per ticket under
//! `.ticket-desk/tickets/`, with project metadata in `.ticket-desk/state.yaml`.
//! Writes go through a temp file and rename, so a ticket file is always
//! either the previous or the new version, never a torn write.

use super::lock::FileLock;
use crate::core::{Ticket, TicketId};
use crate::error::{Result, TicketDeskError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const STATE_FILE: &str = "state.yaml";
const TICKETS_DIR: &str = "tickets";

const DEFAULT_LOCK_RETRIES: u32 = 20;
const DEFAULT_LOCK_BACKOFF: Duration = Duration::from_millis(50);

/// Project-level metadata stored alongside the tickets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectState {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProjectState {
    /// Create state for a freshly initialized project
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            created_at: Utc::now(),
        }
    }
}

/// File-based storage rooted at a `.ticket-desk` directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    lock_retries: u32,
    lock_backoff: Duration,
}

impl FileStorage {
    /// Create a storage handle rooted at the given directory
    ///
    /// The directory does not have to exist yet; `initialize` creates it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock_retries: DEFAULT_LOCK_RETRIES,
            lock_backoff: DEFAULT_LOCK_BACKOFF,
        }
    }

    /// Override the lock retry budget
    #[must_use]
    pub const fn with_lock_settings(mut self, retries: u32, backoff: Duration) -> Self {
        self.lock_retries = retries;
        self.lock_backoff = backoff;
        self
    }

    /// The storage root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root.join(TICKETS_DIR)
    }

    fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE)
    }

    fn ticket_path(&self, id: &TicketId) -> PathBuf {
        self.tickets_dir().join(format!("{id}.yaml"))
    }

    /// Whether this directory has been initialized as a project
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state_path().exists()
    }

    /// Create the directory layout and write the project state
    pub fn initialize(&self, state: &ProjectState) -> Result<()> {
        fs::create_dir_all(self.tickets_dir())?;
        self.save_state(state)?;
        tracing::debug!(root = %self.root.display(), "initialized project storage");
        Ok(())
    }

    /// Load the project state
    pub fn load_state(&self) -> Result<ProjectState> {
        if !self.is_initialized() {
            return Err(TicketDeskError::ProjectNotInitialized);
        }
        let content = fs::read_to_string(self.state_path())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Persist the project state
    pub fn save_state(&self, state: &ProjectState) -> Result<()> {
        write_atomically(&self.state_path(), &serde_yaml::to_string(state)?)
    }

    /// Persist a ticket
    pub fn save_ticket(&self, ticket: &Ticket) -> Result<()> {
        if !self.tickets_dir().exists() {
            return Err(TicketDeskError::ProjectNotInitialized);
        }
        write_atomically(
            &self.ticket_path(&ticket.id),
            &serde_yaml::to_string(ticket)?,
        )?;
        tracing::debug!(ticket = %ticket.id, status = %ticket.status, "saved ticket");
        Ok(())
    }

    /// Load a ticket by ID
    pub fn load_ticket(&self, id: &TicketId) -> Result<Ticket> {
        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(TicketDeskError::TicketNotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load every ticket in the project
    pub fn load_all_tickets(&self) -> Result<Vec<Ticket>> {
        let dir = self.tickets_dir();
        if !dir.exists() {
            return Err(TicketDeskError::ProjectNotInitialized);
        }

        let mut tickets = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            tickets.push(serde_yaml::from_str(&content)?);
        }
        tracing::debug!(count = tickets.len(), "loaded tickets");
        Ok(tickets)
    }

    /// Run a mutation on one ticket under its lock
    ///
    /// Loads the latest version, applies `mutate`, and persists the result
    /// only if the mutation succeeded. This is the serialization point for
    /// close/append races: whichever mutation acquires the lock second sees
    /// the first one's effect.
    pub(crate) fn update_ticket<T>(
        &self,
        id: &TicketId,
        mutate: impl FnOnce(&mut Ticket) -> Result<T>,
    ) -> Result<T> {
        let lock_path = self.ticket_path(id).with_extension("yaml.lock");
        let _lock = FileLock::acquire(
            lock_path,
            &id.to_string(),
            self.lock_retries,
            self.lock_backoff,
        )?;

        let mut ticket = self.load_ticket(id)?;
        let outcome = mutate(&mut ticket)?;
        self.save_ticket(&ticket)?;
        Ok(outcome)
    }
}

/// Write a file via temp-file-and-rename
fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("yaml.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
