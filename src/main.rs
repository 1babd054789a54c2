use clap::Parser;
use log::debug;
use quotebook::application::QuoteBook;
use quotebook::cli::{Cli, Prompter, Session};
use quotebook::error::{QuoteError, Result};
use quotebook::infrastructure::config::DEFAULT_CONFIG_FILE;
use quotebook::infrastructure::{Config, FileSystemRepository};
use std::io;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // An explicitly requested config file must exist; the default one is optional
    let config_path = match cli.config {
        Some(path) if !path.exists() => {
            return Err(QuoteError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path,
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let config = Config::load(&config_path)?.with_overrides(cli.file, cli.page_size);
    debug!("Using config {:?}", config);

    let book = QuoteBook::open(FileSystemRepository::new(config.file))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    Session::new(book, prompter, config.page_size).run()
}
