//! Command handlers invoked by the `promptline` binary

pub mod config;
pub mod path;
pub mod prompt;

pub use config::handle_print_config_command;
pub use path::handle_path_command;
pub use prompt::handle_prompt_command;
