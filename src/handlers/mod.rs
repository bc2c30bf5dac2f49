pub mod command_handlers;
pub mod filter_handlers;

pub use command_handlers::{handle_command, run_interactive, Command};
