//! Subcommand implementations.

pub mod style;
