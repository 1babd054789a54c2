//! Infrastructure layer - Backing file and configuration

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, QuoteRepository};
