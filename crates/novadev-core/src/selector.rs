//! Module selector: composes discovery, sentinel handling, and git-diff
//! narrowing into the table the invokers run over.

use crate::discovery::discover_path_table;
use crate::error::{Error, Result};
use crate::git::{filter_by_diff, DiffSpec};
use crate::path_table::{PathTable, Selection};
use crate::settings::Settings;

/// Produces the path table for one style-check run.
///
/// Discovers the configured repositories, removes the non-module core
/// entries, narrows by `selection`, then by `diff`.
///
/// # Errors
///
/// Returns a usage error if every partition is empty after filtering:
/// running the tools on nothing must not silently pass.
pub fn select_modules(
    settings: &Settings,
    selection: &Selection,
    diff: &DiffSpec,
) -> Result<PathTable> {
    let mut table = discover_path_table(settings);
    table.remove_non_modules();
    table.apply(selection);
    let table = filter_by_diff(table, diff)?;

    if table.is_empty() {
        return Err(Error::Usage("No modules selected.".to_string()));
    }
    Ok(table)
}
