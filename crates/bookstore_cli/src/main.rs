//! Bookstore CLI
//!
//! Command-line tools for a bookstore catalog file.
//!
//! # Commands
//!
//! - `find` - Print one book by id
//! - `list` - Print every book
//! - `copies` - Change the number of copies of a book and save the catalog

mod commands;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bookstore catalog tools.
#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(global = true, short, long, default_value = "testdata/catalog.json")]
    path: PathBuf,

    /// Write the catalog as indented JSON when saving
    #[arg(global = true, long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the book with the given id
    Find {
        /// Book id
        id: String,
    },

    /// Print every book in the catalog
    List,

    /// Set the number of copies of a book
    Copies {
        /// Book id
        id: String,

        /// New number of copies
        #[arg(allow_negative_numbers = true)]
        copies: i64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Commands::Find { id } => commands::find::run(&cli.path, &id, &mut out),
        Commands::List => commands::list::run(&cli.path, &mut out),
        Commands::Copies { id, copies } => {
            commands::copies::run(&cli.path, &id, copies, cli.pretty, &mut out)
        }
    };

    match result {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log level used when `RUST_LOG` is not set.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}
