//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(about = "Interactive Book of Quotes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Quote file to read and write (default: my_quotes.txt)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Quotes shown per page when viewing (0 shows all)
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Config file (default: quotebook.toml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["quotebook"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.page_size.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "quotebook",
            "--file",
            "wisdom.txt",
            "-p",
            "5",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("wisdom.txt")));
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_invalid_page_size() {
        assert!(Cli::try_parse_from(["quotebook", "--page-size", "ten"]).is_err());
    }
}
