//! Flake8 invoker.
//!
//! Simpler analog of the pylint invoker: no path transformation, one
//! command per non-empty group with that group's config file appended.

use std::path::{Path, PathBuf};

use crate::command::{run_command, CommandResult};
use crate::error::Result;
use crate::path_table::PathTable;
use crate::settings::Settings;
use crate::tool_config::{config_file_paths, ToolKind};

/// Runs flake8 over the selected modules and extensions.
///
/// # Errors
///
/// Returns an error only if flake8 could not be launched; style findings
/// are folded into the returned [`CommandResult`].
pub fn run_flake8(table: &PathTable, settings: &Settings) -> Result<CommandResult> {
    let configs = config_file_paths(ToolKind::Flake8, settings);

    let cli_paths: Vec<PathBuf> = table
        .core
        .values()
        .chain(table.command.values())
        .cloned()
        .collect();
    let ext_paths: Vec<PathBuf> = table.ext.values().cloned().collect();

    let cli_result = run_group(&cli_paths, &configs.cli, "modules")?;
    let ext_result = run_group(&ext_paths, &configs.ext, "extensions")?;
    Ok(CommandResult::combine(cli_result, ext_result))
}

fn run_group(paths: &[PathBuf], config: &Path, desc: &str) -> Result<Option<CommandResult>> {
    if paths.is_empty() {
        return Ok(None);
    }
    tracing::debug!("using config file: {}", config.display());
    tracing::info!("Running flake8 on {desc}...");
    run_command("flake8", &flake8_args(paths, config)).map(Some)
}

/// Builds the flake8 argument list for one path group.
fn flake8_args(paths: &[PathBuf], config: &Path) -> Vec<String> {
    let mut args = vec![
        "--statistics".to_string(),
        format!("--append-config={}", config.display()),
    ];
    args.extend(paths.iter().map(|p| p.display().to_string()));
    args
}
