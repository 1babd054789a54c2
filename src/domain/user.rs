//! Session user

/// The person using the Book of Quotes during this session.
/// Captured at startup and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        User { name, email }
    }
}
