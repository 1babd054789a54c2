//! Error types for quotebook

use thiserror::Error;

/// Main error type for quotebook
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Quote number {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl QuoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuoteError::Config(_) | QuoteError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuoteError::InputClosed => {
                "Input closed before the session finished\n\n\
                Suggestions:\n\
                • Choose option 6 to leave the Book of Quotes\n\
                • When piping input, end the script with a line containing 6"
                    .to_string()
            }
            QuoteError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Valid keys: file, page_size\n\
                    Example quotebook.toml:\n\
                    file = \"my_quotes.txt\"\n\
                    page_size = 10",
                    msg
                )
            }
            QuoteError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse config file: {}\n\n\
                    Valid keys: file, page_size",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;
