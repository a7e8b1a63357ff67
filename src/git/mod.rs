//! Git command-line plumbing

pub mod args;

pub use args::Args;
