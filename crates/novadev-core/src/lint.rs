//! Pylint invoker.
//!
//! Builds and runs one pylint command per non-empty path group: core and
//! command modules on one side, extensions on the other, each with its own
//! rcfile.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::command::{run_command, CommandResult};
use crate::discovery::EXTENSION_PREFIX;
use crate::error::{Error, Result};
use crate::path_table::PathTable;
use crate::settings::Settings;
use crate::tool_config::{config_file_paths, ToolKind};

/// Optional pylint behavior tweaks.
#[derive(Debug, Clone, Default)]
pub struct PylintOptions {
    /// Plugin checkers to load (`--load-plugins`).
    pub checkers: Vec<String>,
    /// Start from an empty rule set (`--disable=all`).
    pub disable_all: bool,
    /// Rules to enable (`--enable`).
    pub enable: Vec<String>,
}

/// Runs pylint over the selected modules and extensions.
///
/// A group with no paths yields no invocation and contributes nothing to
/// the combined result.
///
/// # Errors
///
/// Returns an error only if pylint could not be launched; lint findings are
/// folded into the returned [`CommandResult`].
pub fn run_pylint(
    table: &PathTable,
    settings: &Settings,
    options: &PylintOptions,
) -> Result<CommandResult> {
    let configs = config_file_paths(ToolKind::Pylint, settings);

    let mut cli_paths: Vec<PathBuf> = table
        .core
        .values()
        .map(|p| nested_package_path(p))
        .collect();
    cli_paths.extend(table.command.values().cloned());
    let ext_paths = extension_paths(table);

    let cli_result = run_group(&cli_paths, &configs.cli, "modules", options)?;
    let ext_result = run_group(&ext_paths, &configs.ext, "extensions", options)?;
    Ok(CommandResult::combine(cli_result, ext_result))
}

/// Verifies the Nova CLI is installed before a lint run.
///
/// Pylint imports the CLI while checking plugin and command code, so a
/// missing installation would fail every file.
///
/// # Errors
///
/// Returns a usage error if the `nova` binary cannot be probed.
pub fn require_nova_cli() -> Result<()> {
    let probe = Command::new("nova").arg("--version").output();
    match probe {
        Ok(output) if output.status.success() => Ok(()),
        _ => Err(Error::Usage(
            "--pylint requires the Nova CLI to be installed.".to_string(),
        )),
    }
}

fn run_group(
    paths: &[PathBuf],
    rcfile: &Path,
    desc: &str,
    options: &PylintOptions,
) -> Result<Option<CommandResult>> {
    if paths.is_empty() {
        return Ok(None);
    }
    tracing::debug!("using rcfile: {}", rcfile.display());
    tracing::info!("Running pylint on {desc}...");
    let args = pylint_args(paths, rcfile, num_cpus::get(), options);
    run_command("pylint", &args).map(Some)
}

/// Builds the pylint argument list for one path group.
fn pylint_args(
    paths: &[PathBuf],
    rcfile: &Path,
    jobs: usize,
    options: &PylintOptions,
) -> Vec<String> {
    let mut args: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    args.push(format!("--rcfile={}", rcfile.display()));
    args.push("--jobs".to_string());
    args.push(jobs.to_string());
    if !options.checkers.is_empty() {
        args.push("--load-plugins".to_string());
        args.push(options.checkers.join(","));
    }
    if options.disable_all {
        args.push("--disable=all".to_string());
    }
    if !options.enable.is_empty() {
        args.push("--enable".to_string());
        args.push(options.enable.join(","));
    }
    args
}

/// Reconstructs the nested namespace-package directory from a hyphenated
/// distribution name: `src/nova-cli-core` → `src/nova-cli-core/nova/cli/core`.
fn nested_package_path(dist_dir: &Path) -> PathBuf {
    let mut path = dist_dir.to_path_buf();
    if let Some(tail) = dist_dir.file_name().and_then(|t| t.to_str()) {
        for segment in tail.split('-') {
            path.push(segment);
        }
    }
    path
}

/// Expands each extension source dir to its first `novaext_*` package
/// directory.
fn extension_paths(table: &PathTable) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for dir in table.ext.values() {
        let pattern = dir.join(format!("{EXTENSION_PREFIX}*"));
        let Some(pattern) = pattern.to_str() else {
            continue;
        };
        match glob::glob(pattern).ok().and_then(|mut m| m.find_map(std::result::Result::ok)) {
            Some(first) => paths.push(first),
            None => tracing::debug!("no {EXTENSION_PREFIX}* package under {}", dir.display()),
        }
    }
    paths
}
