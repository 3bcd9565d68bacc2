//! Handler for the `notifications` command
//!
//! Renders the derived activity feed for a viewer role. The feed is
//! recomputed from the store on every call; there is no notification state
//! to go stale.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::cli::utils::format_datetime;
use crate::core::Role;
use crate::error::{Result, TicketDeskError};
use crate::storage::TicketStore;

/// Handler for the `notifications` command
///
/// # Arguments
///
/// * `viewer` - Viewer role: "user" or "admin"
/// * `limit` - Optional cap on the number of entries shown
/// * `project_dir` - Optional project directory path
/// * `output` - Output formatter for displaying results
pub fn handle_notifications_command(
    viewer: &str,
    limit: Option<usize>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let viewer: Role = viewer.parse().map_err(TicketDeskError::InvalidInput)?;

    let mut notifications = ctx.storage.list_notifications(viewer)?;
    if let Some(limit) = limit {
        notifications.truncate(limit);
    }

    if output.is_json() {
        let entries: Vec<_> = notifications
            .iter()
            .map(|n| {
                serde_json::json!({
                    "id": n.id.to_string(),
                    "ticket_id": n.ticket_id.to_string(),
                    "ticket": n.ticket_id.short(),
                    "message": n.message,
                    "created_at": n.created_at,
                })
            })
            .collect();

        output.print_json(&serde_json::json!({
            "viewer": viewer.to_string(),
            "notifications": entries,
            "total": entries.len(),
        }))?;
    } else if notifications.is_empty() {
        output.info(&format!("No notifications for {viewer}"));
    } else {
        output.info(&format!("Notifications for {viewer}:"));
        for notification in &notifications {
            output.info(&format!(
                "[{}] #{} {}",
                format_datetime(notification.created_at),
                notification.ticket_id.short(),
                notification.message,
            ));
        }
        output.info(&format!("\n{} notification(s)", notifications.len()));
    }

    Ok(())
}
