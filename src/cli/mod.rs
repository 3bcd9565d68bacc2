//! Command-line interface
//!
//! Argument definitions live here; the logic for each command lives in its
//! handler module under [`handlers`].

pub mod handlers;
pub mod output;
pub mod utils;

pub use output::OutputFormatter;
pub use utils::find_project_root;

use clap::{Parser, Subcommand};

/// A lightweight support-ticket tracker
#[derive(Parser)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to searching upward from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a ticket-desk project in the current directory
    Init {
        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,

        /// Reinitialize even if a project already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Open a new ticket
    New {
        /// Short summary of the request
        subject: String,

        /// Full description of the request
        #[arg(short, long)]
        description: String,

        /// Department the ticket belongs to (defaults from config)
        #[arg(short = 'D', long)]
        department: Option<String>,

        /// Attachment reference, e.g. an uploaded file key
        #[arg(short, long)]
        attachment: Option<String>,
    },

    /// List tickets
    List {
        /// Filter by status (open, closed)
        #[arg(short, long)]
        status: Option<String>,

        /// Filter by department
        #[arg(short = 'D', long)]
        department: Option<String>,

        /// Sort by: created, activity, subject, status
        #[arg(long, default_value = "created")]
        sort: String,

        /// Reverse the sort order
        #[arg(short, long)]
        reverse: bool,

        /// Show at most this many tickets
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a ticket and its message thread
    Show {
        /// Ticket ID or unique ID suffix
        ticket: String,
    },

    /// Send a message on a ticket's thread
    Message {
        /// Ticket ID or unique ID suffix
        ticket: String,

        /// Who is writing: user or admin
        #[arg(short, long, default_value = "user")]
        from: String,

        /// Message text
        #[arg(short, long)]
        text: Option<String>,

        /// Attachment reference
        #[arg(short, long)]
        attachment: Option<String>,
    },

    /// Close a ticket
    Close {
        /// Ticket ID or unique ID suffix
        ticket: String,
    },

    /// Show the notification feed for a viewer
    Notifications {
        /// Viewer role: user or admin
        #[arg(long, default_value = "user")]
        viewer: String,

        /// Show at most this many notifications
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show project status and aggregate counts
    Check {
        /// Include per-department breakdown and recent tickets
        #[arg(short, long)]
        detailed: bool,
    },
}
