//! Copies command implementation.

use super::{CommandResult, Outcome};
use bookstore_core::{Catalog, Config};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Runs the copies command: updates one book and saves the catalog in place.
pub fn run(
    path: &Path,
    id: &str,
    copies: i64,
    pretty: bool,
    out: &mut impl Write,
) -> CommandResult {
    info!("Setting copies of {:?} to {} in {:?}", id, copies, path);
    let config = Config::new().pretty(pretty);
    let catalog =
        Catalog::load_with_config(path, config).map_err(|e| format!("opening catalog: {e}"))?;

    catalog
        .set_copies(id, copies)
        .map_err(|e| format!("updating book: {e}"))?;
    catalog
        .sync(None)
        .map_err(|e| format!("writing catalog: {e}"))?;

    writeln!(out, "Updated book {id} to {copies} copies")?;
    Ok(Outcome::Success)
}
