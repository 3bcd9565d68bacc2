//! Command handlers
//!
//! One module per command, plus shared plumbing in `common` and
//! `list_common`.

pub mod check;
pub mod close;
pub mod common;
pub mod init;
pub mod list;
pub mod list_common;
pub mod message;
pub mod new;
pub mod notifications;
pub mod show;

pub use check::handle_check_command;
pub use close::handle_close_command;
pub use init::handle_init_command;
pub use list::handle_list_command;
pub use message::handle_message_command;
pub use new::handle_new_command;
pub use notifications::handle_notifications_command;
pub use show::handle_show_command;
