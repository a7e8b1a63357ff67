//! GitHub-aware argument rewriting for git subcommands.
//!
//! The library half holds everything the `gh` binary needs so it can be
//! exercised without spawning a process: argument vectors, token matchers,
//! the clone rewriter, clone URL construction and configuration loading.

pub mod cli;
pub mod commands;
pub mod config;
pub mod git;
pub mod github;
pub mod utils;
