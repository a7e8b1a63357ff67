//! Git subcommands that gh rewrites before handing them to git

pub mod clone;
pub mod matchers;

pub use clone::{transform_clone_args, CloneRewrite, DirProbe, LocalFs};
