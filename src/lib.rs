//! quotebook - Personal Book of Quotes
//!
//! An interactive command-line application for recording quotes with their
//! authors, then listing, searching, editing and deleting them. Quotes are
//! kept in a flat text file, one quote per line.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuoteError;
