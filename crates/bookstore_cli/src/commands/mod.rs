//! CLI command implementations.
//!
//! Each command loads the catalog, performs one action and writes a
//! human-readable result to `out`.

pub mod copies;
pub mod find;
pub mod list;

use std::error::Error;
use std::process::ExitCode;

/// How a command that ran to completion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Success,
    /// The requested book does not exist.
    NotFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::FAILURE,
        }
    }
}

/// Result of a command: its outcome, or an error to print.
pub type CommandResult = Result<Outcome, Box<dyn Error>>;
