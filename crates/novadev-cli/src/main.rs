//! novadev CLI tool.
//!
//! Usage:
//! ```bash
//! novadev style [MODULES]...
//! novadev style CLI --pylint
//! novadev style --git-source feature --git-target main --git-repo ~/src/nova-cli
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// Developer tooling for the Nova CLI monorepo
#[derive(Parser)]
#[command(name = "novadev")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run style checks (pylint, flake8) over selected modules
    Style {
        /// Module or extension names; `CLI` or `EXT` restricts to one side
        modules: Vec<String>,

        /// Run the pylint check
        #[arg(long)]
        pylint: bool,

        /// Run the flake8 check
        #[arg(long)]
        pep8: bool,

        /// Git ref containing the changes under review
        #[arg(long)]
        git_source: Option<String>,

        /// Git ref to diff against
        #[arg(long)]
        git_target: Option<String>,

        /// Repository the git refs live in
        #[arg(long)]
        git_repo: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Style {
            modules,
            pylint,
            pep8,
            git_source,
            git_target,
            git_repo,
        } => commands::style::run(&modules, pylint, pep8, git_source, git_target, git_repo),
    }
}
