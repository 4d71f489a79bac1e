//! List command implementation.

use super::{CommandResult, Outcome};
use bookstore_core::Catalog;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Runs the list command.
///
/// Books are printed sorted by id so repeated runs produce the same output.
pub fn run(path: &Path, out: &mut impl Write) -> CommandResult {
    info!("Listing books in {:?}", path);
    let catalog = Catalog::load(path).map_err(|e| format!("opening catalog: {e}"))?;

    let mut books = catalog.get_all();
    books.sort_by(|a, b| a.id.cmp(&b.id));

    writeln!(out, "Books in stock:")?;
    for book in &books {
        writeln!(out, "{book}")?;
    }
    Ok(Outcome::Success)
}
