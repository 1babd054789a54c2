//! Backing file repository

use crate::domain::Quote;
use crate::error::{QuoteError, Result};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Abstract storage for the quote sequence
pub trait QuoteRepository {
    /// Location of the backing file
    fn path(&self) -> &Path;

    /// Check if the backing file exists
    fn is_initialized(&self) -> bool;

    /// Create an empty backing file
    fn initialize(&self) -> Result<()>;

    /// Read every well-formed quote, in file order
    fn load(&self) -> Result<Vec<Quote>>;

    /// Overwrite the backing file with the given quotes
    fn save(&self, quotes: &[Quote]) -> Result<()>;
}

/// Flat text file implementation of QuoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub path: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        FileSystemRepository { path }
    }
}

impl QuoteRepository for FileSystemRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn is_initialized(&self) -> bool {
        self.path.is_file()
    }

    fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, "")?;
        debug!("Created empty quote file at {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Quote>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(QuoteError::Io(e)),
        };

        let mut quotes = Vec::new();
        for (number, line) in contents.lines().enumerate() {
            match Quote::parse_line(line) {
                Some(quote) => quotes.push(quote),
                None if line.trim().is_empty() => {}
                None => warn!(
                    "Skipping malformed line {} in {}",
                    number + 1,
                    self.path.display()
                ),
            }
        }

        debug!("Loaded {} quotes from {}", quotes.len(), self.path.display());
        Ok(quotes)
    }

    fn save(&self, quotes: &[Quote]) -> Result<()> {
        let mut contents = String::new();
        for quote in quotes {
            contents.push_str(&quote.to_line());
            contents.push('\n');
        }

        fs::write(&self.path, contents)?;
        debug!("Saved {} quotes to {}", quotes.len(), self.path.display());
        Ok(())
    }
}
