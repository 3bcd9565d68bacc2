//! Handler for the `init` command

use crate::cli::OutputFormatter;
use crate::cli::utils::DESK_DIR;
use crate::error::{Result, TicketDeskError};
use crate::storage::{FileStorage, ProjectState};
use std::path::PathBuf;

/// Handler for the `init` command
///
/// Creates the `.ticket-desk` directory layout in the target directory and
/// writes the project state file.
///
/// # Errors
///
/// Returns an error if the project is already initialized (unless `force`)
/// or if the directory cannot be created.
pub fn handle_init_command(
    name: Option<&str>,
    description: Option<&str>,
    force: bool,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let target = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    let storage = FileStorage::new(target.join(DESK_DIR));
    if storage.is_initialized() && !force {
        return Err(TicketDeskError::custom(format!(
            "Project already initialized at {}. Use --force to reinitialize",
            target.display()
        )));
    }

    let project_name = name.map_or_else(
        || {
            target
                .file_name()
                .map_or_else(|| "ticket-desk".to_string(), |n| n.to_string_lossy().to_string())
        },
        ToString::to_string,
    );

    let state = ProjectState::new(project_name, description.map(ToString::to_string));
    storage.initialize(&state)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "project": state.name,
            "path": target,
        }))?;
    } else {
        output.success(&format!("Initialized ticket-desk project '{}'", state.name));
        output.info(&format!("Storage: {}", storage.root().display()));
    }

    Ok(())
}
