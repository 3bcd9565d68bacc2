//! Handler for the `message` command
//!
//! Appends a message to a ticket's thread on behalf of either side of the
//! conversation.

use super::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::OutputFormatter;
use crate::core::{AttachmentRef, MessageDraft, Role};
use crate::error::{Result, TicketDeskError};
use crate::storage::TicketStore;

/// Handler for the `message` command
///
/// # Arguments
///
/// * `ticket_ref` - Ticket ID or unique ID suffix
/// * `from` - Author role: "user" or "admin"
/// * `text` - Optional message text
/// * `attachment` - Optional attachment reference
/// * `project_dir` - Optional project directory path
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Fails if the ticket does not exist, is closed, or the payload carries
/// neither text nor attachment.
pub fn handle_message_command(
    ticket_ref: &str,
    from: &str,
    text: Option<String>,
    attachment: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let ticket_id = resolve_ticket_ref(&ctx.storage, ticket_ref)?;

    let author: Role = from.parse().map_err(TicketDeskError::InvalidInput)?;
    let draft = MessageDraft::new(author, text, attachment.and_then(AttachmentRef::new));

    let message = ctx.storage.append_message(&ticket_id, draft)?;
    let thread_len = ctx.storage.list_messages(&ticket_id)?.len();

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket_id": ticket_id.to_string(),
            "message": {
                "id": message.id.to_string(),
                "author": message.author.to_string(),
                "text": message.text,
                "attachment": message.attachment.as_ref().map(|a| a.as_str()),
                "created_at": message.created_at,
            },
            "thread_length": thread_len,
        }))?;
    } else {
        output.success(&format!(
            "Sent message to ticket #{} as {}",
            ticket_id.short(),
            message.author
        ));
        output.info(&format!("Thread length: {thread_len}"));
    }

    Ok(())
}
