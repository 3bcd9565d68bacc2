//! Handler for the `new` command
//!
//! Opens a ticket with a subject, description, department, and optional
//! attachment reference.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{AttachmentRef, TicketDraft};
use crate::error::Result;
use crate::storage::TicketStore;

/// Handler for the `new` command
///
/// # Arguments
///
/// * `subject` - Short summary of the request
/// * `description` - Full description
/// * `department` - Optional department; falls back to the configured default
/// * `attachment` - Optional attachment reference
/// * `project_dir` - Optional project directory path
/// * `output` - Output formatter for displaying results
pub fn handle_new_command(
    subject: &str,
    description: &str,
    department: Option<String>,
    attachment: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;

    let department =
        department.unwrap_or_else(|| ctx.config.project.default_department.clone());
    let draft = TicketDraft::new(subject, description, department)
        .with_attachment(attachment.and_then(AttachmentRef::new));

    let ticket = ctx.storage.create_ticket(draft)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": {
                "id": ticket.id.to_string(),
                "short_id": ticket.id.short(),
                "subject": ticket.subject,
                "department": ticket.department,
                "status": ticket.status.to_string(),
                "created_at": ticket.created_at,
            },
        }))?;
    } else {
        output.success(&format!(
            "Opened ticket #{} '{}'",
            ticket.id.short(),
            ticket.subject
        ));
        output.info(&format!("Department: {}", ticket.department));
        output.info(&format!("ID: {}", ticket.id));
    }

    Ok(())
}
