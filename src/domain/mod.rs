//! Domain layer - Quote records and validation rules

pub mod collection;
pub mod quote;
pub mod user;
pub mod validation;

pub use collection::{normalize_search_term, QuoteCollection};
pub use quote::Quote;
pub use user::User;
