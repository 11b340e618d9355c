//! Repository discovery: builds the path table from configured checkouts.
//!
//! Discovery is deliberately forgiving. An unconfigured or missing
//! repository yields empty partitions; selection decides whether that is
//! fatal.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::path_table::PathTable;
use crate::settings::Settings;

/// Distribution-name prefix of core CLI packages.
pub const CORE_PREFIX: &str = "nova-cli";

/// Package-directory prefix of extension sources.
pub const EXTENSION_PREFIX: &str = "novaext_";

/// Location of the command-modules tree inside the CLI repo.
const COMMAND_MODULES_DIR: &str = "src/nova-cli/nova/cli/command_modules";

/// Builds the path table from the configured repositories.
#[must_use]
pub fn discover_path_table(settings: &Settings) -> PathTable {
    let mut table = PathTable::default();

    if let Some(cli_repo) = settings.cli_repo() {
        for (name, path) in package_dirs(&cli_repo.join("src")) {
            if name.starts_with(CORE_PREFIX) {
                table.core.insert(name, path);
            }
        }
        for (name, path) in python_package_dirs(&cli_repo.join(COMMAND_MODULES_DIR)) {
            table.command.insert(name, path);
        }
    }

    if let Some(ext_repo) = settings.extensions_repo() {
        for (name, path) in package_dirs(&ext_repo.join("src")) {
            table.ext.insert(name, path);
        }
    }

    tracing::debug!(
        "discovered {} core, {} command, {} ext",
        table.core.len(),
        table.command.len(),
        table.ext.len()
    );
    table
}

/// Immediate subdirectories of `root` containing a `setup.py`.
fn package_dirs(root: &Path) -> Vec<(String, PathBuf)> {
    child_dirs(root, "setup.py")
}

/// Immediate subdirectories of `root` containing an `__init__.py`.
fn python_package_dirs(root: &Path) -> Vec<(String, PathBuf)> {
    child_dirs(root, "__init__.py")
}

fn child_dirs(root: &Path, marker: &str) -> Vec<(String, PathBuf)> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        if !entry.path().join(marker).is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.starts_with('.') || name.starts_with("__") {
            continue;
        }
        found.push((name.to_string(), entry.into_path()));
    }
    found
}
