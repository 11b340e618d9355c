//! Settings store for configured repository checkouts.
//!
//! Settings live in `config.toml` inside the novadev config directory:
//!
//! ```toml
//! [cli]
//! repo_path = "/home/me/src/nova-cli"
//!
//! [ext]
//! repo_paths = "/home/me/src/nova-cli-extensions /home/me/src/private-ext"
//! ```
//!
//! A missing file is not an error; every lookup then falls back to its
//! bundled default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Settings file name within the config directory.
const SETTINGS_FILE: &str = "config.toml";

/// Substring identifying the public extensions checkout among `repo_paths`.
pub const EXTENSIONS_REPO_HINT: &str = "nova-cli-extensions";

/// Resolved novadev settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// The `[cli]` section.
    #[serde(default)]
    pub cli: CliSettings,

    /// The `[ext]` section.
    #[serde(default)]
    pub ext: ExtSettings,
}

/// Settings for the CLI repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliSettings {
    /// Checkout of the Nova CLI repository, if configured.
    #[serde(default)]
    pub repo_path: Option<PathBuf>,
}

/// Settings for extension repositories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtSettings {
    /// Whitespace-separated list of extension repository checkouts.
    #[serde(default)]
    pub repo_paths: Option<String>,
}

impl Settings {
    /// Loads settings from the novadev config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(config_dir())
    }

    /// Testable core: takes the config directory as a parameter.
    pub(crate) fn load_from(dir: Option<PathBuf>) -> Result<Self> {
        let Some(dir) = dir else {
            return Ok(Self::default());
        };
        let path = dir.join(SETTINGS_FILE);
        if !path.is_file() {
            tracing::debug!("no settings file at {}", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::ConfigIo {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::ConfigParse { message, .. } => Error::ConfigParse { path, message },
            other => other,
        })
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: PathBuf::from(SETTINGS_FILE),
            message: e.to_string(),
        })
    }

    /// The configured CLI repository checkout, if any.
    #[must_use]
    pub fn cli_repo(&self) -> Option<&Path> {
        self.cli.repo_path.as_deref()
    }

    /// The first configured extension repository naming the public
    /// extensions checkout, if any.
    #[must_use]
    pub fn extensions_repo(&self) -> Option<PathBuf> {
        self.ext
            .repo_paths
            .as_deref()?
            .split_whitespace()
            .find(|p| p.contains(EXTENSIONS_REPO_HINT))
            .map(PathBuf::from)
    }
}

/// Returns the novadev config directory.
///
/// Resolution: `$NOVADEV_CONFIG_DIR` > `~/.novadev`.
///
/// The env var override enables testing and custom CI setups.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NOVADEV_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".novadev"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_content_yields_defaults() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.cli_repo().is_none());
        assert!(settings.extensions_repo().is_none());
    }

    #[test]
    fn parses_both_sections() {
        let settings = Settings::parse(
            r#"
[cli]
repo_path = "/src/nova-cli"

[ext]
repo_paths = "/src/nova-cli-extensions"
"#,
        )
        .unwrap();
        assert_eq!(settings.cli_repo(), Some(Path::new("/src/nova-cli")));
        assert_eq!(
            settings.extensions_repo(),
            Some(PathBuf::from("/src/nova-cli-extensions"))
        );
    }

    #[test]
    fn extensions_repo_picks_entry_matching_hint() {
        let settings = Settings::parse(
            r#"
[ext]
repo_paths = "/src/private-ext /src/nova-cli-extensions /src/other"
"#,
        )
        .unwrap();
        assert_eq!(
            settings.extensions_repo(),
            Some(PathBuf::from("/src/nova-cli-extensions"))
        );
    }

    #[test]
    fn extensions_repo_is_none_without_matching_entry() {
        let settings = Settings::parse(
            r#"
[ext]
repo_paths = "/src/private-ext /src/other"
"#,
        )
        .unwrap();
        assert!(settings.extensions_repo().is_none());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = Settings::parse("[cli\nrepo_path = 3");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(Some(dir.path().to_path_buf())).unwrap();
        assert!(settings.cli_repo().is_none());
    }

    #[test]
    fn load_from_reads_settings_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[cli]\nrepo_path = \"/src/nova-cli\"\n",
        )
        .unwrap();
        let settings = Settings::load_from(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(settings.cli_repo(), Some(Path::new("/src/nova-cli")));
    }

    #[test]
    fn load_from_no_config_dir_yields_defaults() {
        let settings = Settings::load_from(None).unwrap();
        assert!(settings.cli_repo().is_none());
    }

    #[test]
    fn parse_error_carries_settings_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not toml at all [").unwrap();
        let err = Settings::load_from(Some(dir.path().to_path_buf())).unwrap_err();
        match err {
            Error::ConfigParse { path, .. } => {
                assert!(path.ends_with("config.toml"));
                assert!(path.starts_with(dir.path()));
            }
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }
}
