//! Error types for ticket-desk
//!
//! All failures are reported synchronously as typed errors; nothing is
//! swallowed or logged-and-ignored inside the library. Every rejected
//! operation leaves prior state unchanged.

use thiserror::Error;

/// Result type alias using [`TicketDeskError`]
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// All errors that can occur in ticket-desk
#[derive(Debug, Error)]
pub enum TicketDeskError {
    /// Project has not been initialized
    #[error("Project is not initialized. Run `ticket-desk init` first")]
    ProjectNotInitialized,

    /// Ticket not found in storage
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A ticket reference matched more than one ticket
    #[error("Ticket reference '{reference}' is ambiguous")]
    AmbiguousTicketRef { reference: String },

    /// Ticket payload failed required-field validation
    #[error("Invalid ticket: {reason}")]
    InvalidTicket { reason: String },

    /// Message payload failed validation
    #[error("Invalid message: {reason}")]
    InvalidMessage { reason: String },

    /// Close requested on a ticket that is already closed
    #[error("Ticket '{id}' is already closed")]
    InvalidTransition { id: String },

    /// Mutation attempted on a closed ticket
    #[error("Ticket '{id}' is closed and no longer accepts messages")]
    TicketClosed { id: String },

    /// Could not acquire the lock for a ticket within the retry budget
    #[error("Timed out waiting for lock on ticket '{id}'")]
    LockTimeout { id: String },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Custom error with a message
    #[error("{0}")]
    Custom(String),
}

impl TicketDeskError {
    /// Create a custom error from any displayable value
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// A user-facing message for this error
    ///
    /// Unlike the `Display` impl, this may rephrase internal errors in
    /// friendlier terms for terminal output.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File operation failed: {e}"),
            Self::Serialization(e) => format!("Could not read ticket data: {e}"),
            _ => self.to_string(),
        }
    }

    /// Suggestions for resolving this error, if any
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectNotInitialized => vec![
                "Run `ticket-desk init` to initialize a project here".to_string(),
                "Or pass --project <path> to point at an existing project".to_string(),
            ],
            Self::TicketNotFound { .. } => vec![
                "Run `ticket-desk list` to see available tickets".to_string(),
                "Ticket references accept a full ID or its short suffix".to_string(),
            ],
            Self::AmbiguousTicketRef { .. } => {
                vec!["Use more characters of the ticket ID to disambiguate".to_string()]
            },
            Self::TicketClosed { .. } | Self::InvalidTransition { .. } => vec![
                "Check the ticket status with `ticket-desk show <ticket>`".to_string(),
            ],
            Self::InvalidMessage { .. } => {
                vec!["Provide --text, --attachment, or both".to_string()]
            },
            Self::LockTimeout { .. } => {
                vec!["Another process is writing this ticket; retry shortly".to_string()]
            },
            _ => vec![],
        }
    }

    /// Whether the caller can reasonably retry or correct this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialization(_))
    }

    /// Whether this error originates from configuration loading
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
