//! Git-diff filter: narrows a path table to entries touched between two
//! refs.
//!
//! The diff itself is delegated to `git`; this module only resolves the
//! changed paths and prunes the table.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::path_table::PathTable;

/// Ref pair (and repository) selecting the diff to filter by.
#[derive(Debug, Clone, Default)]
pub struct DiffSpec {
    /// Ref containing the changes under review.
    pub source: Option<String>,
    /// Ref to diff against.
    pub target: Option<String>,
    /// Repository the refs live in.
    pub repo: Option<PathBuf>,
}

impl DiffSpec {
    fn is_unset(&self) -> bool {
        self.source.is_none() && self.target.is_none() && self.repo.is_none()
    }
}

/// Prunes `table` to entries with files changed between the spec's refs.
///
/// With no refs given the table passes through unchanged.
///
/// # Errors
///
/// Returns a usage error for a partially specified spec, and a hard error
/// if `git diff` itself fails.
pub fn filter_by_diff(table: PathTable, spec: &DiffSpec) -> Result<PathTable> {
    if spec.is_unset() {
        return Ok(table);
    }
    let (Some(source), Some(target), Some(repo)) = (&spec.source, &spec.target, &spec.repo)
    else {
        return Err(Error::Usage(
            "--git-source, --git-target and --git-repo must be provided together.".to_string(),
        ));
    };

    let changed = changed_files(repo, source, target)?;
    tracing::debug!("{} changed file(s) between {target} and {source}", changed.len());
    Ok(prune(table, &changed))
}

/// Absolute paths of files changed between `target` and `source`.
fn changed_files(repo: &Path, source: &str, target: &str) -> Result<Vec<PathBuf>> {
    let range = format!("{target}...{source}");
    let rendered = format!("git diff --name-only {range}");
    tracing::debug!("running: {rendered}");

    let output = Command::new("git")
        .args(["diff", "--name-only", &range])
        .current_dir(repo)
        .output()
        .map_err(|e| Error::Spawn {
            command: rendered,
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git {
            message: stderr.trim().to_string(),
        });
    }

    let repo_root = repo.canonicalize()?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| repo_root.join(line))
        .collect())
}

/// Retains only entries whose directory contains a changed file.
fn prune(mut table: PathTable, changed: &[PathBuf]) -> PathTable {
    let touched = |path: &PathBuf| {
        let resolved = path.canonicalize().unwrap_or_else(|_| path.clone());
        changed.iter().any(|file| file.starts_with(&resolved))
    };
    table.core.retain(|_, path| touched(path));
    table.command.retain(|_, path| touched(path));
    table.ext.retain(|_, path| touched(path));
    table
}
