//! Main menu choices

use std::str::FromStr;

/// Menu banner printed before every choice
pub const MENU: &str = "*** Book of Quotes ***\n\
---------------------------\n\
1. Add author and quote\n\
2. Delete quote\n\
3. Edit quote\n\
4. Search quotes by author or keyword\n\
5. View all quotes\n\
6. Exit\n\
---------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Edit,
    Search,
    View,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Delete),
            "3" => Ok(MenuChoice::Edit),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::View),
            "6" => Ok(MenuChoice::Exit),
            _ => Err("Incorrect number. Please choose a number from 1 to 6.".to_string()),
        }
    }
}
