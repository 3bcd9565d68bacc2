//! Test utilities for ticket-desk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{MessageDraft, Role, Status, Ticket, TicketDraft};
use crate::storage::{FileStorage, ProjectState, TicketStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for creating a temporary project
pub struct TestProject {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
    pub storage: FileStorage,
}

impl TestProject {
    /// Create a new test project with initialized ticket-desk storage
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_root = temp_dir.path().to_path_buf();
        let storage = FileStorage::new(project_root.join(".ticket-desk"));
        storage
            .initialize(&ProjectState::new("test-project", None))
            .expect("Failed to initialize storage");

        Self {
            temp_dir,
            project_root,
            storage,
        }
    }

    /// Create a test project with a few sample tickets
    pub fn with_sample_tickets() -> Self {
        let project = Self::new();

        let login = project.create_ticket("Login issue");
        project
            .storage
            .append_message(
                &login.id,
                MessageDraft::new(Role::User, Some("Still broken".to_string()), None),
            )
            .expect("Failed to append message");

        project.create_ticket("Billing question");

        let resolved = project.create_ticket("Password reset");
        project
            .storage
            .close_ticket(&resolved.id)
            .expect("Failed to close ticket");

        project
    }

    /// Get the project root path as a string
    pub fn root_path_str(&self) -> &str {
        self.project_root.to_str().expect("Invalid path")
    }

    /// Create and persist a ticket
    pub fn create_ticket(&self, subject: &str) -> Ticket {
        self.storage
            .create_ticket(TicketDraft::new(
                subject,
                format!("Description for {subject}"),
                "Support",
            ))
            .expect("Failed to create ticket")
    }
}

/// Assert that two tickets are equal (ignoring message timestamps)
pub fn assert_tickets_equal(left: &Ticket, right: &Ticket) {
    assert_eq!(left.id, right.id, "Ticket IDs don't match");
    assert_eq!(left.subject, right.subject, "Ticket subjects don't match");
    assert_eq!(
        left.description, right.description,
        "Ticket descriptions don't match"
    );
    assert_eq!(
        left.department, right.department,
        "Ticket departments don't match"
    );
    assert_eq!(left.status, right.status, "Ticket statuses don't match");
    assert_eq!(
        left.thread.len(),
        right.thread.len(),
        "Thread lengths don't match"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.storage.is_initialized());
    }

    #[test]
    fn test_project_with_sample_tickets() {
        let project = TestProject::with_sample_tickets();
        let tickets = project.storage.list_tickets().unwrap();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets.iter().filter(|t| t.status == Status::Open).count(), 2);
    }
}
