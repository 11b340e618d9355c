//! Per-tool config file resolution.
//!
//! Each tool gets a pair of config files, one for core/command modules and
//! one for extensions. A path configured in the settings store wins;
//! otherwise the bundled default under `<config_dir>/config_files/` is used.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::settings::{config_dir, Settings};

/// Subdirectory of the config dir holding bundled default config files.
const CONFIG_FILES_DIR: &str = "config_files";

/// The two external tools novadev drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// The linter.
    Pylint,
    /// The style checker.
    Flake8,
}

impl ToolKind {
    /// Config file name looked up inside a configured repository.
    #[must_use]
    pub fn repo_config_name(self) -> &'static str {
        match self {
            Self::Pylint => "pylintrc",
            Self::Flake8 => ".flake8",
        }
    }

    fn default_cli_config(self) -> &'static str {
        match self {
            Self::Pylint => "cli_pylintrc",
            Self::Flake8 => "cli.flake8",
        }
    }

    fn default_ext_config(self) -> &'static str {
        match self {
            Self::Pylint => "ext_pylintrc",
            Self::Flake8 => "ext.flake8",
        }
    }
}

impl FromStr for ToolKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pylint" => Ok(Self::Pylint),
            "flake8" => Ok(Self::Flake8),
            other => Err(Error::UnsupportedTool {
                given: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pylint => write!(f, "pylint"),
            Self::Flake8 => write!(f, "flake8"),
        }
    }
}

/// Resolved config file paths for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPair {
    /// Config applied to core and command-module paths.
    pub cli: PathBuf,
    /// Config applied to extension paths.
    pub ext: PathBuf,
}

/// Computes the effective config files for `tool`.
#[must_use]
pub fn config_file_paths(tool: ToolKind, settings: &Settings) -> ConfigPair {
    config_file_paths_in(tool, settings, config_dir())
}

/// Testable core: takes the config directory as a parameter to avoid env
/// var races.
fn config_file_paths_in(
    tool: ToolKind,
    settings: &Settings,
    config_dir: Option<PathBuf>,
) -> ConfigPair {
    let defaults = config_dir.unwrap_or_default().join(CONFIG_FILES_DIR);

    let cli = match settings.cli_repo() {
        Some(repo) => repo.join(tool.repo_config_name()),
        None => defaults.join(tool.default_cli_config()),
    };

    let ext = match settings.extensions_repo() {
        Some(repo) => repo.join(tool.repo_config_name()),
        None => defaults.join(tool.default_ext_config()),
    };

    tracing::debug!("{tool} config files: {} / {}", cli.display(), ext.display());
    ConfigPair { cli, ext }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_settings() -> Settings {
        Settings::parse(
            r#"
[cli]
repo_path = "/src/nova-cli"

[ext]
repo_paths = "/src/nova-cli-extensions"
"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_supported_tools() {
        assert_eq!("pylint".parse::<ToolKind>().unwrap(), ToolKind::Pylint);
        assert_eq!("flake8".parse::<ToolKind>().unwrap(), ToolKind::Flake8);
    }

    #[test]
    fn unsupported_tool_is_a_value_error() {
        let err = "pycodestyle".parse::<ToolKind>().unwrap_err();
        match err {
            Error::UnsupportedTool { given } => assert_eq!(given, "pycodestyle"),
            other => panic!("expected UnsupportedTool, got {other:?}"),
        }
    }

    #[test]
    fn configured_repos_win_for_pylint() {
        let pair = config_file_paths_in(
            ToolKind::Pylint,
            &configured_settings(),
            Some(PathBuf::from("/home/me/.novadev")),
        );
        assert_eq!(pair.cli, PathBuf::from("/src/nova-cli/pylintrc"));
        assert_eq!(pair.ext, PathBuf::from("/src/nova-cli-extensions/pylintrc"));
    }

    #[test]
    fn configured_repos_win_for_flake8() {
        let pair = config_file_paths_in(
            ToolKind::Flake8,
            &configured_settings(),
            Some(PathBuf::from("/home/me/.novadev")),
        );
        assert_eq!(pair.cli, PathBuf::from("/src/nova-cli/.flake8"));
        assert_eq!(pair.ext, PathBuf::from("/src/nova-cli-extensions/.flake8"));
    }

    #[test]
    fn unconfigured_settings_fall_back_to_bundled_defaults() {
        let pair = config_file_paths_in(
            ToolKind::Pylint,
            &Settings::default(),
            Some(PathBuf::from("/home/me/.novadev")),
        );
        assert_eq!(
            pair.cli,
            PathBuf::from("/home/me/.novadev/config_files/cli_pylintrc")
        );
        assert_eq!(
            pair.ext,
            PathBuf::from("/home/me/.novadev/config_files/ext_pylintrc")
        );
    }

    #[test]
    fn groups_resolve_independently() {
        // CLI repo configured, extensions not: cli uses the repo file while
        // ext still falls back to the bundled default.
        let settings = Settings::parse("[cli]\nrepo_path = \"/src/nova-cli\"\n").unwrap();
        let pair = config_file_paths_in(
            ToolKind::Flake8,
            &settings,
            Some(PathBuf::from("/home/me/.novadev")),
        );
        assert_eq!(pair.cli, PathBuf::from("/src/nova-cli/.flake8"));
        assert_eq!(
            pair.ext,
            PathBuf::from("/home/me/.novadev/config_files/ext.flake8")
        );
    }
}
