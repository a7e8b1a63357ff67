//! Command-line interface for gh
//!
//! Wraps git subcommands, expanding GitHub shorthand in their arguments.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::clone::{LONG_ABOUT as CLONE_LONG_ABOUT, USAGE as CLONE_USAGE};

mod clone;

/// GitHub-aware shorthand for git commands
#[derive(Parser)]
#[command(name = "gh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Print the resulting git command and exit
    #[arg(long)]
    noop: bool,

    /// Path to config file (defaults to ~/.config/gh/config.toml)
    #[arg(short = 'c', long, value_name = "FILE", env = "GH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a remote repository into a new directory
    #[command(override_usage = CLONE_USAGE, long_about = CLONE_LONG_ABOUT)]
    Clone(clone::CloneArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Clone(args) => clone::run(args, cli.noop, cli.config.as_deref()),
    }
}
