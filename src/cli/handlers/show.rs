//! Handler for the `show` command
//!
//! Displays one ticket with its full message thread, the textual version
//! of the ticket detail screen.

use super::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::OutputFormatter;
use crate::cli::utils::format_datetime;
use crate::error::Result;
use crate::storage::TicketStore;

/// Handler for the `show` command
///
/// # Arguments
///
/// * `ticket_ref` - Ticket ID or unique ID suffix
/// * `project_dir` - Optional project directory path
/// * `output` - Output formatter for displaying results
pub fn handle_show_command(
    ticket_ref: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let ticket_id = resolve_ticket_ref(&ctx.storage, ticket_ref)?;
    let ticket = ctx.storage.get_ticket(&ticket_id)?;
    let messages = ctx.storage.list_messages(&ticket_id)?;

    if output.is_json() {
        let messages_json: Vec<_> = messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.id.to_string(),
                    "author": m.author.to_string(),
                    "text": m.text,
                    "attachment": m.attachment.as_ref().map(|a| a.as_str()),
                    "created_at": m.created_at,
                })
            })
            .collect();

        output.print_json(&serde_json::json!({
            "ticket": {
                "id": ticket.id.to_string(),
                "short_id": ticket.id.short(),
                "subject": ticket.subject,
                "description": ticket.description,
                "department": ticket.department,
                "status": ticket.status.to_string(),
                "attachment": ticket.attachment.as_ref().map(|a| a.as_str()),
                "created_at": ticket.created_at,
                "closed_at": ticket.closed_at,
            },
            "messages": messages_json,
        }))?;
        return Ok(());
    }

    output.info(&format!("Ticket #{}: {}", ticket.id.short(), ticket.subject));
    output.info(&format!("Status: {}", ticket.status));
    output.info(&format!("Department: {}", ticket.department));
    output.info(&format!("Created: {}", format_datetime(ticket.created_at)));
    if let Some(closed_at) = ticket.closed_at {
        output.info(&format!("Closed: {}", format_datetime(closed_at)));
    }
    if let Some(ref attachment) = ticket.attachment {
        output.info(&format!("Attachment: {attachment}"));
    }
    output.info("");
    output.info(&ticket.description);

    output.info("");
    if messages.is_empty() {
        output.info("No messages yet");
    } else {
        output.info("Messages:");
        for message in &messages {
            output.info(&format!(
                "[{}] {}:",
                format_datetime(message.created_at),
                message.author
            ));
            if let Some(ref text) = message.text {
                output.info(&format!("  {text}"));
            }
            if let Some(ref attachment) = message.attachment {
                output.info(&format!("  (attachment: {attachment})"));
            }
        }
    }

    if !ticket.is_open() {
        output.warning("This ticket is closed. It no longer accepts messages.");
    }

    Ok(())
}
