//! CLI layer - Arguments, prompts and the interactive session

pub mod commands;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod session;

pub use commands::Cli;
pub use menu::MenuChoice;
pub use output::{format_page, format_search_results};
pub use prompt::Prompter;
pub use session::{Session, SessionState};
