//! gh: GitHub-aware shorthand for git
//!
//! Rewrites `owner/repo` and bare `repo` arguments into full GitHub clone URLs
//! before they reach `git clone`.

use anyhow::Result;

fn main() -> Result<()> {
    gh::cli::run()
}
