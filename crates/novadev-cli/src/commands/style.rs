//! Style command implementation.
//!
//! Linear pipeline: select modules, run the requested tools, report per-tool
//! status, and exit the process with the summed exit code.

use anyhow::Result;
use novadev_core::{
    require_nova_cli, run_flake8, run_pylint, select_modules, CommandResult, DiffSpec,
    PylintOptions, Selection, Settings,
};
use std::path::PathBuf;

use crate::output::{display, heading};

/// Runs the style command.
pub fn run(
    modules: &[String],
    pylint: bool,
    pep8: bool,
    git_source: Option<String>,
    git_target: Option<String>,
    git_repo: Option<PathBuf>,
) -> Result<()> {
    heading("Style Check");

    let settings = Settings::load()?;
    let selection = Selection::from_args(modules);

    if pylint {
        require_nova_cli()?;
    }

    let diff = DiffSpec {
        source: git_source,
        target: git_target,
        repo: git_repo,
    };
    let table = select_modules(&settings, &selection, &diff)?;

    let module_names = table.module_names();
    if !module_names.is_empty() {
        display(&format!("Modules: {}\n", module_names.join(", ")));
    }
    let ext_names = table.extension_names();
    if !ext_names.is_empty() {
        display(&format!("Extensions: {}\n", ext_names.join(", ")));
    }

    let (pylint, pep8) = effective_checks(pylint, pep8);

    let mut exit_code_sum = 0;

    if pylint {
        let result = run_pylint(&table, &settings, &PylintOptions::default())?;
        exit_code_sum += result.exit_code;
        report("Pylint", &result);
    }

    if pep8 {
        let result = run_flake8(&table, &settings)?;
        exit_code_sum += result.exit_code;
        report("Flake8", &result);
    }

    std::process::exit(exit_code_sum);
}

/// Neither flag provided behaves as if both were.
fn effective_checks(pylint: bool, pep8: bool) -> (bool, bool) {
    if pylint || pep8 {
        (pylint, pep8)
    } else {
        (true, true)
    }
}

/// Prints the per-tool status line, logging captured output on failure.
fn report(tool: &str, result: &CommandResult) {
    match &result.error {
        Some(error) => {
            tracing::error!("{}", error.output);
            tracing::error!("{tool}: FAILED\n");
        }
        None => display(&format!("{tool}: PASSED\n")),
    }
}
