//! Configuration management

use crate::error::{QuoteError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file, relative to the working directory
pub const DEFAULT_QUOTE_FILE: &str = "my_quotes.txt";

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "quotebook.toml";

/// Default number of quotes shown per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backing file holding the quotes
    pub file: PathBuf,
    /// Quotes per page when viewing; 0 shows everything
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::from(DEFAULT_QUOTE_FILE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load config from a TOML file, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(QuoteError::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, file: Option<PathBuf>, page_size: Option<usize>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file, PathBuf::from("my_quotes.txt"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("quotebook.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotebook.toml");
        fs::write(&path, "page_size = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.file, PathBuf::from("my_quotes.txt"));
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotebook.toml");
        fs::write(&path, "file = \"wisdom.txt\"\npage_size = 0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.file, PathBuf::from("wisdom.txt"));
        assert_eq!(config.page_size, 0);
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotebook.toml");
        fs::write(&path, "page_size = \"ten\"\n").unwrap();

        match Config::load(&path).unwrap_err() {
            QuoteError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotebook.toml");
        fs::write(&path, "editor = \"vim\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("other.txt")), None);
        assert_eq!(config.file, PathBuf::from("other.txt"));
        assert_eq!(config.page_size, 10);

        let config = Config::default().with_overrides(None, Some(5));
        assert_eq!(config.file, PathBuf::from("my_quotes.txt"));
        assert_eq!(config.page_size, 5);
    }
}
