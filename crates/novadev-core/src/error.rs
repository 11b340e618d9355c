//! Error types for novadev operations.
//!
//! Only failures that abort an operation before (or instead of) running an
//! external tool are errors. A tool exiting non-zero is not an error; that
//! outcome is folded into [`crate::CommandResult`] and surfaces through the
//! summed process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by novadev operations.
#[derive(Debug, Error)]
pub enum Error {
    /// User-facing usage error, reported verbatim.
    #[error("usage error: {0}")]
    Usage(String),

    /// Unsupported tool identifier passed to config-file resolution.
    #[error("unsupported config file type '{given}': allowed values are pylint, flake8")]
    UnsupportedTool {
        /// The identifier that failed to parse.
        given: String,
    },

    /// IO error reading the settings file.
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Parse error in the settings file.
    #[error("failed to parse config file {path}: {message}")]
    ConfigParse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// An external command could not be launched at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that failed to launch.
        command: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// `git diff` itself failed (bad refs, not a repository).
    #[error("git diff failed: {message}")]
    Git {
        /// Trimmed stderr from git.
        message: String,
    },

    /// Other IO failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
