//! Application layer - Use cases and orchestration

pub mod quote_book;

pub use quote_book::QuoteBook;
