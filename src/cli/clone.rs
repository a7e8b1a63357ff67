//! Clone command implementation

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::commands::{transform_clone_args, CloneRewrite, LocalFs};
use crate::config::LazyGitHubConfig;
use crate::git;

#[derive(Args)]
pub struct CloneArgs {
    /// Arguments for git clone; [USER/]REPOSITORY becomes a GitHub URL
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn run(args: CloneArgs, noop: bool, config: Option<&Path>) -> Result<()> {
    let mut git_args = git::Args::new("clone", args.args).with_noop(noop);

    if !git_args.is_params_empty() {
        // Only a shorthand needs the login; URLs and paths never load config.
        let github = LazyGitHubConfig::new(config);
        let outcome = transform_clone_args(&mut git_args, &github, &LocalFs);
        if let Some(err) = github.into_error() {
            return Err(anyhow::Error::new(err).context("Failed to resolve GitHub login"));
        }

        if let CloneRewrite::DryRun(command_line) = outcome {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{command_line}")?;
            stdout.flush()?;
            std::process::exit(0);
        }
    }

    println!("{}", git_args.to_command_line());
    Ok(())
}
