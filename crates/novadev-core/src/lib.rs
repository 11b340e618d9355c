//! # novadev-core
//!
//! Module selection and style-check orchestration for the Nova CLI
//! monorepo.
//!
//! The crate selects a subset of the monorepo's core packages, command
//! modules, and extensions, then drives two external tools over that
//! subset:
//!
//! - [`select_modules`] and [`PathTable`] for selection
//! - [`filter_by_diff`] to narrow selection to what a git diff touched
//! - [`run_pylint`] / [`run_flake8`] to invoke the tools per path group
//! - [`CommandResult`] to aggregate the outcomes into one exit code
//!
//! ## Example
//!
//! ```ignore
//! use novadev_core::{discover_path_table, run_flake8, Settings};
//!
//! let settings = Settings::load()?;
//! let table = discover_path_table(&settings);
//! let result = run_flake8(&table, &settings)?;
//! std::process::exit(result.exit_code);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod discovery;
mod error;
mod git;
mod lint;
mod path_table;
mod selector;
mod settings;
mod style;
mod tool_config;

pub use command::{run_command, CommandError, CommandResult};
pub use discovery::{discover_path_table, CORE_PREFIX, EXTENSION_PREFIX};
pub use error::{Error, Result};
pub use git::{filter_by_diff, DiffSpec};
pub use lint::{require_nova_cli, run_pylint, PylintOptions};
pub use path_table::{PathTable, Selection, NON_MODULES};
pub use selector::select_modules;
pub use settings::{config_dir, CliSettings, ExtSettings, Settings, EXTENSIONS_REPO_HINT};
pub use style::run_flake8;
pub use tool_config::{config_file_paths, ConfigPair, ToolKind};
