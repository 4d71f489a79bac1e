//! Find command implementation.

use super::{CommandResult, Outcome};
use bookstore_core::Catalog;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Message printed when the id is not in the catalog.
pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn't find that book in the catalog.";

/// Runs the find command.
pub fn run(path: &Path, id: &str, out: &mut impl Write) -> CommandResult {
    info!("Looking up {:?} in {:?}", id, path);
    let catalog = Catalog::load(path).map_err(|e| format!("opening catalog: {e}"))?;

    match catalog.get(id) {
        Some(book) => {
            writeln!(out, "{book}")?;
            Ok(Outcome::Success)
        }
        None => {
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
            Ok(Outcome::NotFound)
        }
    }
}
