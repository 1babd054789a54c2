//! Quote record and backing-file line format
//!
//! Every line of the backing file holds one quote. The canonical form is
//! `"<text>", <author>` with embedded double quotes doubled. Files written by
//! older versions may also contain bare `<text>,<author>` lines, which
//! [`Quote::parse_line`] accepts as well.

use std::fmt;

/// A quote and the person it is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Parse one line of the backing file
    ///
    /// Returns None for blank lines, lines without an author field, and lines
    /// where either field is empty after trimming.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (text, author) = parse_quoted(line).or_else(|| parse_bare(line))?;

        let text = text.trim();
        let author = author.trim();
        if text.is_empty() || author.is_empty() {
            return None;
        }

        Some(Quote::new(text, author))
    }

    /// Serialize to the canonical line format (without trailing newline)
    pub fn to_line(&self) -> String {
        format!("\"{}\", {}", self.text.replace('"', "\"\""), self.author)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {}", self.text, self.author)
    }
}

/// `"text", author` with `""` as an escaped quote inside the text
fn parse_quoted(line: &str) -> Option<(String, &str)> {
    let body = line.strip_prefix('"')?;
    let mut text = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '"' {
            text.push(c);
            continue;
        }
        if let Some((_, '"')) = chars.peek() {
            text.push('"');
            chars.next();
            continue;
        }

        let rest = body[i + 1..].trim_start();
        let author = rest.strip_prefix(',')?;
        return Some((text, author));
    }

    None
}

/// Legacy `text,author` split on the first comma. A wrapping pair of quotes
/// around unescaped inner quotes (`"He said "hi"", Bob`) is removed.
fn parse_bare(line: &str) -> Option<(String, &str)> {
    let (text, author) = line.split_once(',')?;
    let text = text.trim();
    let text = match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner,
        None => text,
    };
    Some((text.to_string(), author))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_line() {
        let quote = Quote::parse_line("\"Be yourself.\", Oscar Wilde").unwrap();
        assert_eq!(quote, Quote::new("Be yourself.", "Oscar Wilde"));
    }

    #[test]
    fn test_parse_legacy_bare_line() {
        let quote = Quote::parse_line("Know thyself,Socrates\n").unwrap();
        assert_eq!(quote, Quote::new("Know thyself", "Socrates"));
    }

    #[test]
    fn test_parse_quoted_text_with_comma() {
        let quote = Quote::parse_line("\"Veni, vidi, vici\", Julius Caesar").unwrap();
        assert_eq!(quote.text, "Veni, vidi, vici");
        assert_eq!(quote.author, "Julius Caesar");
    }

    #[test]
    fn test_parse_escaped_quotes() {
        let quote = Quote::parse_line("\"He said \"\"no\"\"\", Anonymous").unwrap();
        assert_eq!(quote.text, "He said \"no\"");
    }

    #[test]
    fn test_parse_unescaped_inner_quotes() {
        let quote = Quote::parse_line("\"He said \"hi\" loudly\", Bob").unwrap();
        assert_eq!(quote, Quote::new("He said \"hi\" loudly", "Bob"));

        let resaved = Quote::parse_line(&quote.to_line()).unwrap();
        assert_eq!(resaved, quote);
    }

    #[test]
    fn test_parse_trims_fields() {
        let quote = Quote::parse_line("   \"  padded  \" ,   Someone   ").unwrap();
        assert_eq!(quote, Quote::new("padded", "Someone"));
    }

    #[test]
    fn test_parse_skips_incomplete_lines() {
        assert_eq!(Quote::parse_line(""), None);
        assert_eq!(Quote::parse_line("   "), None);
        assert_eq!(Quote::parse_line("no author here"), None);
        assert_eq!(Quote::parse_line("\"text only\","), None);
        assert_eq!(Quote::parse_line(", Nobody"), None);
    }

    #[test]
    fn test_to_line_format() {
        let quote = Quote::new("Be yourself.", "Oscar Wilde");
        assert_eq!(quote.to_line(), "\"Be yourself.\", Oscar Wilde");
    }

    #[test]
    fn test_to_line_escapes_quotes() {
        let quote = Quote::new("a \"b\" c", "D");
        assert_eq!(quote.to_line(), "\"a \"\"b\"\" c\", D");
        assert_eq!(Quote::parse_line(&quote.to_line()), Some(quote));
    }

    #[test]
    fn test_display() {
        let quote = Quote::new("Be yourself.", "Oscar Wilde");
        assert_eq!(quote.to_string(), "'Be yourself.' by Oscar Wilde");
    }
}
