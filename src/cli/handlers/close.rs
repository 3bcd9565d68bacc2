//! Handler for the `close` command

use super::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::OutputFormatter;
use crate::cli::utils::format_datetime;
use crate::error::Result;
use crate::storage::TicketStore;

/// Handler for the `close` command
///
/// Closes an open ticket. Closing is a one-way transition: a closed ticket
/// never reopens, and closing it again is an error.
pub fn handle_close_command(
    ticket_ref: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let ticket_id = resolve_ticket_ref(&ctx.storage, ticket_ref)?;

    let ticket = ctx.storage.close_ticket(&ticket_id)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": {
                "id": ticket.id.to_string(),
                "subject": ticket.subject,
                "status": ticket.status.to_string(),
                "closed_at": ticket.closed_at,
            },
        }))?;
    } else {
        output.success(&format!(
            "Closed ticket #{} '{}'",
            ticket.id.short(),
            ticket.subject
        ));
        if let Some(closed_at) = ticket.closed_at {
            output.info(&format!("Closed at: {}", format_datetime(closed_at)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::error::TicketDeskError;
    use crate::storage::TicketStore;
    use crate::test_utils::TestProject;

    #[test]
    fn test_close_marks_ticket_closed() {
        let project = TestProject::new();
        let ticket = project.create_ticket("Login issue");
        let formatter = OutputFormatter::new(false, true);

        let result = handle_close_command(
            &ticket.id.to_string(),
            Some(project.root_path_str()),
            &formatter,
        );
        assert!(result.is_ok());

        let reloaded = project.storage.get_ticket(&ticket.id).unwrap();
        assert_eq!(reloaded.status, Status::Closed);
        assert!(reloaded.closed_at.is_some());
    }

    #[test]
    fn test_close_twice_is_rejected() {
        let project = TestProject::new();
        let ticket = project.create_ticket("Login issue");
        let formatter = OutputFormatter::new(false, true);
        let ticket_ref = ticket.id.to_string();

        handle_close_command(&ticket_ref, Some(project.root_path_str()), &formatter).unwrap();
        let again =
            handle_close_command(&ticket_ref, Some(project.root_path_str()), &formatter);
        assert!(matches!(
            again.unwrap_err(),
            TicketDeskError::InvalidTransition { .. }
        ));
    }
}
