//! Handler for the `check` command
//!
//! This module implements the logic for checking the current project
//! status, including the aggregate counts the dashboards show: total
//! tickets, open tickets, and pending notifications per viewer.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::cli::utils::format_datetime;
use crate::core::{Role, Ticket, derive_notifications};
use crate::error::Result;
use crate::storage::{FileStorage, ProjectState, TicketStore};
use std::collections::BTreeMap;

/// Handler for the `check` command
///
/// # Arguments
///
/// * `detailed` - Whether to include the department breakdown and recent tickets
/// * `project_dir` - Optional project directory path
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Returns an error if the project is not initialized or storage reads fail.
pub fn handle_check_command(
    detailed: bool,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let check_data = gather_check_data(detailed, project_dir)?;

    if output.is_json() {
        output_json(&check_data, output)?;
    } else {
        output_text(&check_data, detailed, output);
    }

    Ok(())
}

/// Data structure for check command
struct CheckData {
    project_state: ProjectState,
    statistics: Statistics,
    recent_tickets: Vec<Ticket>,
}

/// Aggregate counts over the current store state
///
/// Always recomputed from the ticket collection on each call, never
/// maintained incrementally, so the numbers cannot drift from the data.
#[derive(Debug, serde::Serialize)]
struct Statistics {
    total: usize,
    open: usize,
    closed: usize,
    admin_notifications: usize,
    user_notifications: usize,
    by_department: BTreeMap<String, usize>,
}

/// Gather all data needed for check command
fn gather_check_data(detailed: bool, project_dir: Option<&str>) -> Result<CheckData> {
    let ctx = HandlerContext::new(project_dir)?;

    let project_state = ctx.storage.load_state()?;
    let statistics = calculate_statistics(&ctx.storage)?;
    let recent_tickets = if detailed {
        get_recent_tickets(&ctx.storage, 5)?
    } else {
        vec![]
    };

    Ok(CheckData {
        project_state,
        statistics,
        recent_tickets,
    })
}

/// Calculate aggregate counts
fn calculate_statistics(storage: &FileStorage) -> Result<Statistics> {
    let tickets = storage.list_tickets()?;

    let open = tickets.iter().filter(|t| t.is_open()).count();
    let mut by_department = BTreeMap::new();
    for ticket in &tickets {
        *by_department.entry(ticket.department.clone()).or_insert(0) += 1;
    }

    Ok(Statistics {
        total: tickets.len(),
        open,
        closed: tickets.len() - open,
        admin_notifications: derive_notifications(&tickets, Role::Admin).len(),
        user_notifications: derive_notifications(&tickets, Role::User).len(),
        by_department,
    })
}

/// Get recent tickets sorted by creation date
fn get_recent_tickets(storage: &FileStorage, limit: usize) -> Result<Vec<Ticket>> {
    let mut tickets = storage.list_tickets()?;
    tickets.truncate(limit);
    Ok(tickets)
}

/// Output check data as JSON
fn output_json(data: &CheckData, output: &OutputFormatter) -> Result<()> {
    output.print_json(&serde_json::json!({
        "project": {
            "name": data.project_state.name,
            "description": data.project_state.description,
            "created_at": data.project_state.created_at,
        },
        "statistics": data.statistics,
        "recent_tickets": data.recent_tickets.iter().map(|t| serde_json::json!({
            "id": t.id.to_string(),
            "short_id": t.id.short(),
            "subject": t.subject,
            "status": t.status.to_string(),
        })).collect::<Vec<_>>(),
    }))
}

/// Output check data as text
fn output_text(data: &CheckData, detailed: bool, output: &OutputFormatter) {
    output.info(&format!("Project: {}", data.project_state.name));
    if let Some(desc) = &data.project_state.description {
        output.info(&format!("Description: {desc}"));
    }
    output.info(&format!(
        "Created: {}",
        format_datetime(data.project_state.created_at)
    ));

    output.info("");
    output.info("Statistics:");
    output.info(&format!("  Total tickets: {}", data.statistics.total));
    output.info(&format!("  Open: {}", data.statistics.open));
    output.info(&format!("  Closed: {}", data.statistics.closed));
    output.info(&format!(
        "  Notifications (admin): {}",
        data.statistics.admin_notifications
    ));
    output.info(&format!(
        "  Notifications (user): {}",
        data.statistics.user_notifications
    ));

    if detailed && !data.statistics.by_department.is_empty() {
        output.info("");
        output.info("By department:");
        for (department, count) in &data.statistics.by_department {
            output.info(&format!("  {department}: {count}"));
        }
    }

    if detailed && !data.recent_tickets.is_empty() {
        output.info("");
        output.info("Recent tickets:");
        for ticket in &data.recent_tickets {
            output.info(&format!(
                "  #{} [{}] {}",
                ticket.id.short(),
                ticket.status,
                ticket.subject
            ));
        }
    }
}
