//! Ordered quote collection
//!
//! Quotes are addressed by their 1-based display index, which is simply their
//! position in the sequence. Indices shift after a delete.

use crate::domain::Quote;
use crate::error::{QuoteError, Result};

/// In-memory ordered sequence of quotes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteCollection { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    /// Get the quote at a 1-based display index
    pub fn get(&self, index: usize) -> Result<&Quote> {
        let pos = self.position(index)?;
        Ok(&self.quotes[pos])
    }

    /// Append a quote to the end of the sequence
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Remove the quote at a 1-based display index
    pub fn remove(&mut self, index: usize) -> Result<Quote> {
        let pos = self.position(index)?;
        Ok(self.quotes.remove(pos))
    }

    /// Replace the text of the quote at a 1-based display index, keeping its
    /// author. Returns the previous text.
    pub fn replace_text(&mut self, index: usize, text: String) -> Result<String> {
        let pos = self.position(index)?;
        Ok(std::mem::replace(&mut self.quotes[pos].text, text))
    }

    /// Case-insensitive substring search over author and text
    ///
    /// The needle is a contiguous phrase: `"the  MIND"` matches any quote whose
    /// author or text contains `the mind`.
    pub fn search(&self, term: &str) -> Vec<&Quote> {
        let needle = normalize_search_term(term);
        self.quotes
            .iter()
            .filter(|quote| {
                quote.author.to_lowercase().contains(&needle)
                    || quote.text.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Iterate over one page as `(display_index, quote)` pairs
    ///
    /// `page_size == 0` yields every quote starting at index 1 and ignores
    /// `page`. Pages past the end (and page 0) yield nothing.
    pub fn page(&self, page: usize, page_size: usize) -> impl Iterator<Item = (usize, &Quote)> {
        let (start, len) = if page_size == 0 {
            (0, self.quotes.len())
        } else if page == 0 {
            (0, 0)
        } else {
            ((page - 1).saturating_mul(page_size), page_size)
        };

        self.quotes
            .iter()
            .enumerate()
            .skip(start)
            .take(len)
            .map(|(i, quote)| (i + 1, quote))
    }

    /// Number of pages needed to show every quote, never less than 1
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.quotes.len().div_ceil(page_size).max(1)
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.quotes.len() {
            return Err(QuoteError::IndexOutOfRange {
                index,
                len: self.quotes.len(),
            });
        }
        Ok(index - 1)
    }
}

/// Collapse whitespace and lowercase a search term
pub fn normalize_search_term(term: &str) -> String {
    term.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
