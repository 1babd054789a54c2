//! Quote book use cases
//!
//! `QuoteBook` owns the in-memory collection and persists it through a
//! repository after every mutation.

use crate::domain::{Quote, QuoteCollection};
use crate::error::{QuoteError, Result};
use crate::infrastructure::{FileSystemRepository, QuoteRepository};
use log::info;

/// Service holding the quotes of the current session
pub struct QuoteBook<R: QuoteRepository = FileSystemRepository> {
    repository: R,
    quotes: QuoteCollection,
    created_file: bool,
}

impl<R: QuoteRepository> QuoteBook<R> {
    /// Open the book, creating an empty backing file if none exists yet
    pub fn open(repository: R) -> Result<Self> {
        let created_file = !repository.is_initialized();
        if created_file {
            repository.initialize()?;
        }

        let quotes = QuoteCollection::new(repository.load()?);

        Ok(QuoteBook {
            repository,
            quotes,
            created_file,
        })
    }

    /// True when `open` had to create the backing file
    pub fn created_file(&self) -> bool {
        self.created_file
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn quotes(&self) -> &QuoteCollection {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a quote and persist the book
    pub fn add(&mut self, author: &str, text: &str) -> Result<&Quote> {
        let author = require_non_empty(author, "Author")?;
        let text = require_non_empty(text, "Quote text")?;

        self.quotes.push(Quote::new(text, author));
        self.save()?;
        info!("Added quote by {}", author);

        self.quotes.get(self.quotes.len())
    }

    /// Remove the quote at a 1-based index and persist the book
    pub fn delete(&mut self, index: usize) -> Result<Quote> {
        let removed = self.quotes.remove(index)?;
        self.save()?;
        info!("Deleted quote {} by {}", index, removed.author);
        Ok(removed)
    }

    /// Replace the text of the quote at a 1-based index and persist the book.
    /// Returns the previous text.
    pub fn edit(&mut self, index: usize, new_text: &str) -> Result<String> {
        self.quotes.get(index)?;
        let new_text = require_non_empty(new_text, "Quote text")?;

        let old_text = self.quotes.replace_text(index, new_text.to_string())?;
        self.save()?;
        info!("Edited quote {}", index);
        Ok(old_text)
    }

    /// Quotes whose author or text contains the search phrase
    pub fn search(&self, term: &str) -> Vec<&Quote> {
        self.quotes.search(term)
    }

    /// Iterate over one page of `(display_index, quote)` pairs
    pub fn page(&self, page: usize, page_size: usize) -> impl Iterator<Item = (usize, &Quote)> {
        self.quotes.page(page, page_size)
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.quotes.page_count(page_size)
    }

    fn save(&self) -> Result<()> {
        self.repository.save(self.quotes.as_slice())
    }
}

fn require_non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(QuoteError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value)
}
