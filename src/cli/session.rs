//! Interactive session
//!
//! A session moves through three states: it first asks who the user is, then
//! serves menu choices until the user picks "Exit".

use crate::application::QuoteBook;
use crate::cli::menu::{MenuChoice, MENU};
use crate::cli::output::{format_page, format_search_results};
use crate::cli::prompt::{parse_number, Prompter};
use crate::domain::validation::{normalize_author, validate_email, validate_name};
use crate::domain::{normalize_search_term, User};
use crate::error::{QuoteError, Result};
use crate::infrastructure::QuoteRepository;
use log::debug;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingUserSetup,
    MenuLoop,
    Exited,
}

pub struct Session<Repo: QuoteRepository, R, W> {
    book: QuoteBook<Repo>,
    prompter: Prompter<R, W>,
    page_size: usize,
    state: SessionState,
    user: Option<User>,
}

impl<Repo, R, W> Session<Repo, R, W>
where
    Repo: QuoteRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(book: QuoteBook<Repo>, prompter: Prompter<R, W>, page_size: usize) -> Self {
        Session {
            book,
            prompter,
            page_size,
            state: SessionState::AwaitingUserSetup,
            user: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn book(&self) -> &QuoteBook<Repo> {
        &self.book
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        if self.book.created_file() {
            let message = format!(
                "File not found. Creating a new file at {}.",
                self.book.repository().path().display()
            );
            self.prompter.say(&message)?;
        }

        loop {
            self.state = match self.state {
                SessionState::AwaitingUserSetup => {
                    self.user = Some(self.setup_user()?);
                    SessionState::MenuLoop
                }
                SessionState::MenuLoop => self.menu_step()?,
                SessionState::Exited => return Ok(()),
            };
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn setup_user(&mut self) -> Result<User> {
        let name = self.prompt_name()?;
        self.prompter.say(&format!("Username: {}\n", name))?;
        let email = self.prompt_email()?;
        self.prompter.say(&format!("{}\n", email))?;
        Ok(User::new(name, email))
    }

    /// Ask for a name until it validates
    pub fn prompt_name(&mut self) -> Result<String> {
        loop {
            let input = self.prompter.ask("Enter your first and last name: ")?;
            match validate_name(&input) {
                Some(name) => return Ok(name),
                None => self.prompter.say(
                    "Invalid name. Please enter your first name and last name (optional) containing only letters.",
                )?,
            }
        }
    }

    /// Ask for an email address until it validates
    pub fn prompt_email(&mut self) -> Result<String> {
        loop {
            let input = self.prompter.ask("Enter your email here: ")?;
            match validate_email(&input) {
                Some(email) => return Ok(email),
                None => self.prompter.say("Oops! Invalid email. Try again.")?,
            }
        }
    }

    fn menu_step(&mut self) -> Result<SessionState> {
        self.prompter.say(MENU)?;
        let input = self.prompter.ask("Enter your choice between numbers 1-6: ")?;

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(message) => {
                self.prompter.say(&message)?;
                return Ok(SessionState::MenuLoop);
            }
        };
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Add => self.add_quote()?,
            MenuChoice::Delete => self.delete_quote()?,
            MenuChoice::Edit => self.edit_quote()?,
            MenuChoice::Search => self.search_quotes()?,
            MenuChoice::View => self.view_quotes()?,
            MenuChoice::Exit => {
                self.prompter.say("Thank you for using the Book of Quotes")?;
                return Ok(SessionState::Exited);
            }
        }

        Ok(SessionState::MenuLoop)
    }

    fn add_quote(&mut self) -> Result<()> {
        let raw_author = self.prompter.ask("Add the name of the author here: ")?;
        // An author that fails validation is still accepted as typed.
        let author = match normalize_author(&raw_author) {
            Some(author) => author,
            None => {
                self.prompter
                    .say("Invalid name. Please enter a name containing only letters.")?;
                raw_author.trim().to_string()
            }
        };

        let text = self.prompter.ask("Add the quote by this author here: ")?;
        let result = self
            .book
            .add(&author, &text)
            .map(|quote| format!("Quote by {} added successfully.", quote.author));
        self.report(result)
    }

    fn delete_quote(&mut self) -> Result<()> {
        self.prompter.say("Select the quote you want to delete: ")?;
        self.show_all()?;

        let input = self
            .prompter
            .ask("Enter the number of the quote you want to delete: ")?;
        let result = parse_number(&input)
            .and_then(|index| self.book.delete(index))
            .map(|removed| format!("Quote '{}' removed successfully.", removed.text));
        self.report(result)
    }

    fn edit_quote(&mut self) -> Result<()> {
        self.prompter.say("Here's a list of quotes you can edit: ")?;
        self.show_all()?;

        let input = self
            .prompter
            .ask("Select the number of the quote you want to edit: ")?;
        let index = match parse_number(&input).and_then(|index| {
            self.book.quotes().get(index)?;
            Ok(index)
        }) {
            Ok(index) => index,
            Err(e) => return self.report(Err(e)),
        };

        let new_text = self
            .prompter
            .ask("Enter the new version of the quote you want to edit: ")?;
        let result = self
            .book
            .edit(index, &new_text)
            .map(|_| "Quote edited successfully.".to_string());
        self.report(result)
    }

    fn search_quotes(&mut self) -> Result<()> {
        let term = self
            .prompter
            .ask("Enter the author or keyword you want to search: ")?;
        let needle = normalize_search_term(&term);
        let found = self.book.search(&needle);

        let output = format_search_results(&needle, &found);
        self.prompter.say(output.trim_end())
    }

    fn view_quotes(&mut self) -> Result<()> {
        let pages = self.book.page_count(self.page_size);
        let page = loop {
            let input = self.prompter.ask(&format!("Enter page (1-{}): ", pages))?;
            match parse_number(&input) {
                Ok(page) if (1..=pages).contains(&page) => break page,
                _ => self.prompter.say(&format!(
                    "Invalid page. Please enter a number from 1 to {}.",
                    pages
                ))?,
            }
        };

        let output = format_page(page, self.page_size, self.book.page(page, self.page_size));
        self.prompter.say(output.trim_end())
    }

    fn show_all(&mut self) -> Result<()> {
        let output = format_page(1, 0, self.book.page(1, 0));
        self.prompter.say(output.trim_end())
    }

    /// Print the outcome of a menu operation. User mistakes are reported and
    /// the session continues; anything else ends it.
    fn report(&mut self, result: Result<String>) -> Result<()> {
        let message = match result {
            Ok(message) => message,
            Err(QuoteError::InvalidNumber(_)) => {
                "Invalid number. Please provide a valid number.".to_string()
            }
            Err(QuoteError::IndexOutOfRange { .. }) => "Invalid quote number.".to_string(),
            Err(QuoteError::Validation(message)) => message,
            Err(e) => return Err(e),
        };
        self.prompter.say(&message)
    }
}
