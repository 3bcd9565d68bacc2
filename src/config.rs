//! Project configuration
//!
//! Settings are layered: built-in defaults, then an optional
//! `.ticket-desk/config.yaml`, then `TICKET_DESK_*` environment variables.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Display name of the project
    pub name: String,
    /// Department assigned to tickets opened without one
    pub default_department: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "ticket-desk".to_string(),
            default_department: "Support".to_string(),
        }
    }
}

/// Storage-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Retry budget when waiting on a ticket lock
    pub lock_retries: u32,
    /// Delay between lock attempts, in milliseconds
    pub lock_backoff_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            lock_retries: 20,
            lock_backoff_ms: 50,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration for a project rooted at `project_dir`
    ///
    /// Missing config file is fine; defaults and environment overrides
    /// still apply.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(".ticket-desk").join("config.yaml");
        let settings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("TICKET_DESK")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, falling back to defaults on any error
    #[must_use]
    pub fn load_or_default(project_dir: &Path) -> Self {
        Self::load(project_dir).unwrap_or_default()
    }
}
