//! Output formatting for the CLI
//!
//! Handlers never print directly; they go through [`OutputFormatter`] so
//! that `--json` and `--no-color` behave uniformly across commands.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output as colored text or JSON
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{message}");
    }

    /// Print a warning
    pub fn warning(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.yellow());
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Alias for [`Self::print_json`], used on error paths
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        self.print_json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_flag() {
        assert!(OutputFormatter::new(true, false).is_json());
        assert!(!OutputFormatter::new(false, true).is_json());
    }
}
