//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the service layer.

pub mod category;
pub mod history;
pub mod import;
pub mod transaction;

pub use category::handle_categories_command;
pub use history::handle_history_command;
pub use import::{handle_import_command, ImportArgs};
pub use transaction::{
    handle_add_command, handle_balance_command, handle_delete_command, handle_list_command,
    AddArgs, KindArg,
};
