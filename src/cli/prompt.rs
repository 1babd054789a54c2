//! Line-oriented terminal prompts

use crate::error::{QuoteError, Result};
use std::io::{BufRead, Write};

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a prompt and read one line, without its line terminator.
    /// Fails with `InputClosed` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(QuoteError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a 1-based number typed by the user
pub fn parse_number(input: &str) -> Result<usize> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| QuoteError::InvalidNumber(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = Prompter::new(Cursor::new("first\r\nsecond\n"), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap(), "first");
        assert_eq!(prompter.ask("> ").unwrap(), "second");
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut prompter = Prompter::new(Cursor::new("  spaced out  \n"), Vec::new());
        assert_eq!(prompter.ask("").unwrap(), "  spaced out  ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert!(matches!(prompter.ask("> "), Err(QuoteError::InputClosed)));
    }

    #[test]
    fn test_say_appends_newline() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        prompter.say("hello").unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "hello\n");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 3 ").unwrap(), 3);
        assert_eq!(parse_number("0").unwrap(), 0);
        assert!(matches!(
            parse_number("three"),
            Err(QuoteError::InvalidNumber(s)) if s == "three"
        ));
        assert!(parse_number("-1").is_err());
        assert!(parse_number("").is_err());
    }
}
