//! Handler for the `list` command

use super::common::HandlerContext;
use super::list_common::{SortBy, TicketFilter};
use crate::cli::OutputFormatter;
use crate::cli::utils::format_datetime;
use crate::core::Status;
use crate::error::Result;
use crate::storage::TicketStore;

/// Handler for the `list` command
///
/// Lists tickets, optionally filtered by status and department, the way
/// the dashboards present them: short id, subject, status, department,
/// creation date.
#[allow(clippy::too_many_arguments)]
pub fn handle_list_command(
    status: Option<String>,
    department: Option<String>,
    sort: &str,
    reverse: bool,
    limit: Option<usize>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;

    let status = status
        .map(|s| s.parse::<Status>().map_err(crate::error::TicketDeskError::InvalidInput))
        .transpose()?;

    let filter = TicketFilter {
        status,
        department,
        sort_by: SortBy::parse(sort)?,
        reverse,
        limit,
    };

    let tickets = filter.apply(ctx.storage.list_tickets()?);

    if output.is_json() {
        let tickets_json: Vec<_> = tickets
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id.to_string(),
                    "short_id": t.id.short(),
                    "subject": t.subject,
                    "status": t.status.to_string(),
                    "department": t.department,
                    "created_at": t.created_at,
                    "messages": t.thread.len(),
                })
            })
            .collect();

        output.print_json(&serde_json::json!({
            "tickets": tickets_json,
            "total": tickets.len(),
        }))?;
    } else if tickets.is_empty() {
        output.info("No tickets found");
    } else {
        output.info(&format!(
            "{:<8} {:<8} {:<12} {:<18} {}",
            "Ticket", "Status", "Department", "Date", "Subject"
        ));
        for ticket in &tickets {
            output.info(&format!(
                "{:<8} {:<8} {:<12} {:<18} {}",
                ticket.id.short(),
                ticket.status.to_string(),
                ticket.department,
                format_datetime(ticket.created_at),
                ticket.subject,
            ));
        }
        output.info(&format!("\n{} ticket(s)", tickets.len()));
    }

    Ok(())
}
