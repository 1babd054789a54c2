//! Name and email validation

use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

/// Validate a person's name: one or more whitespace-separated tokens made of
/// letters only. Returns the tokens capitalized and joined by single spaces.
///
/// # Examples
///
/// ```
/// use quotebook::domain::validation::validate_name;
///
/// assert_eq!(validate_name("  ada   LOVELACE "), Some("Ada Lovelace".to_string()));
/// assert_eq!(validate_name("r2d2"), None);
/// ```
pub fn validate_name(input: &str) -> Option<String> {
    normalize_tokens(input, |token| token.chars().all(char::is_alphabetic))
}

/// Validate an author name. Like [`validate_name`], but a token may also be
/// a lone apostrophe.
pub fn normalize_author(input: &str) -> Option<String> {
    normalize_tokens(input, |token| {
        token == "'" || token.chars().all(char::is_alphabetic)
    })
}

/// Validate an email address of the form `local@domain.tld`.
/// Surrounding whitespace is ignored when matching; the input is returned
/// exactly as typed.
pub fn validate_email(input: &str) -> Option<String> {
    if email_regex().is_match(input.trim()) {
        Some(input.to_string())
    } else {
        None
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn normalize_tokens(input: &str, valid: impl Fn(&str) -> bool) -> Option<String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() || !tokens.iter().all(|token| valid(token)) {
        return None;
    }
    Some(
        tokens
            .iter()
            .map(|token| capitalize(token))
            .collect::<Vec<_>>()
            .join(" "),
    )
}
