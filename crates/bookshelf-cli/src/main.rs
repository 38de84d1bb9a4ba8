use anyhow::Result;
use bookshelf_core::ReadingStatus;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod tui;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ~/.config/bookshelf/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Open the interactive shelf (the default)
    ///
    /// Shows every book as a card in a grid with its author and reading
    /// status. Move with the arrow keys or h/j/k/l, press 1, 2 or 3 to mark
    /// the selected book not started, reading or completed, Enter to read its
    /// note, and / to search by title or author.
    ///
    /// Status changes last until the shelf is closed.
    Shelf,
    /// List books, optionally filtered
    List {
        /// Case-insensitive text to look for in titles and authors
        query: Option<String>,

        /// Only show books with this status (not-started, reading, completed)
        #[arg(long)]
        status: Option<ReadingStatus>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the note for a book
    Note {
        /// Exact book title
        title: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
    /// Print one value, or the whole file when no key is given
    Get { key: Option<String> },
    /// Set one value in the config file
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_file_path);
    let config = Config::load_from(&config_path)?;
    logging::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Shelf) {
        Commands::Shelf => commands::run_shelf(&config)?,
        Commands::List {
            query,
            status,
            json,
        } => commands::run_list(query, status, json)?,
        Commands::Note { title } => commands::show_note(&title)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config, &config_path)?,
            ConfigAction::Path => commands::config::show_path(&config_path)?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config(&config_path)?,
            ConfigAction::Get { key } => {
                commands::config::get_config(&config, &config_path, key)?;
            }
            ConfigAction::Set { key, value } => {
                commands::config::set_config(&config_path, key, value)?;
            }
        },
    }

    Ok(())
}
