//! Lock files for serializing ticket mutations
//!
//! Mutations on a ticket are read-modify-write sequences over its YAML
//! file. A sibling `.lock` file, created with `create_new`, serializes
//! writers; acquisition retries with a short backoff and fails with a typed
//! error when the budget runs out instead of blocking indefinitely.

use crate::error::{Result, TicketDeskError};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

/// Guard for an acquired lock file; released on drop
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
}

impl FileLock {
    /// Acquire the lock at `path`, retrying up to `retries` times
    ///
    /// `label` identifies the locked resource in the timeout error.
    pub fn acquire(
        path: PathBuf,
        label: &str,
        retries: u32,
        backoff: Duration,
    ) -> Result<Self> {
        let mut attempts = 0;
        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => {
                    tracing::trace!(lock = %path.display(), "acquired lock");
                    return Ok(Self { path });
                },
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    if attempts >= retries {
                        return Err(TicketDeskError::LockTimeout {
                            id: label.to_string(),
                        });
                    }
                    attempts += 1;
                    std::thread::sleep(backoff);
                },
                Err(e) => return Err(TicketDeskError::Io(e)),
            }
        }
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to remove lock file");
        }
    }
}
