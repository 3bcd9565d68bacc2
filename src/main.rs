//! ticket-desk - support-ticket tracker
//!
//! This is the main entry point for the ticket-desk CLI application.
//! It handles command-line argument parsing and dispatches to the
//! appropriate command handlers.

use clap::Parser;
use std::process;
use ticket_desk::cli::{Cli, Commands, OutputFormatter, handlers};
use ticket_desk::error::Result;

/// Main entry point for the ticket-desk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs during command execution
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    dispatch_command(cli.command, cli.project.as_deref(), formatter)
}

fn dispatch_command(
    command: Commands,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Init {
            name,
            description,
            force,
        } => handlers::handle_init_command(
            name.as_deref(),
            description.as_deref(),
            force,
            project,
            formatter,
        ),
        Commands::New {
            subject,
            description,
            department,
            attachment,
        } => handlers::handle_new_command(
            &subject,
            &description,
            department,
            attachment,
            project,
            formatter,
        ),
        Commands::List {
            status,
            department,
            sort,
            reverse,
            limit,
        } => handlers::handle_list_command(
            status, department, &sort, reverse, limit, project, formatter,
        ),
        Commands::Show { ticket } => handlers::handle_show_command(&ticket, project, formatter),
        Commands::Message {
            ticket,
            from,
            text,
            attachment,
        } => handlers::handle_message_command(
            &ticket, &from, text, attachment, project, formatter,
        ),
        Commands::Close { ticket } => handlers::handle_close_command(&ticket, project, formatter),
        Commands::Notifications { viewer, limit } => {
            handlers::handle_notifications_command(&viewer, limit, project, formatter)
        },
        Commands::Check { detailed } => {
            handlers::handle_check_command(detailed, project, formatter)
        },
    }
}

/// Handle errors and display them to the user
///
/// Formats errors in a user-friendly way: the main message, any
/// suggestions for fixing it, and a JSON rendition in `--json` mode.
fn handle_error(error: &ticket_desk::error::TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
