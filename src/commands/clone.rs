//! `clone`: expand `[owner/]repo` shorthand into a GitHub clone URL
//!
//! ```text
//! $ gh clone jingweno/gh
//! > git clone git://github.com/jingweno/gh.git
//!
//! $ gh clone -p jingweno/gh
//! > git clone git@github.com:jingweno/gh.git
//!
//! $ gh clone jekyll_and_hyde
//! > git clone git@github.com:YOUR_LOGIN/jekyll_and_hyde.git
//! ```

use std::path::Path;

use super::matchers::{classify, TokenKind};
use crate::git::Args;
use crate::github::{CurrentLogin, Project, Transport};

/// Flag that forces the SSH transport. Consumed, never passed on to git.
pub const PRIVATE_FLAG: &str = "-p";

pub const USAGE: &str = "gh clone [-p] OPTIONS [USER/]REPOSITORY DIRECTORY";

pub const LONG_ABOUT: &str = "\
Clone repository \"git://github.com/USER/REPOSITORY.git\" into
DIRECTORY as with git-clone(1). When USER/ is omitted, assumes
your GitHub login. With -p, clone private repositories over SSH.
For repositories under your GitHub login, -p is implicit.";

/// Answers whether a path names an existing local directory.
pub trait DirProbe {
    fn is_dir(&self, path: &str) -> bool;
}

/// Probe backed by the real filesystem, relative to the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl DirProbe for LocalFs {
    fn is_dir(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }
}

impl<F> DirProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_dir(&self, path: &str) -> bool {
        self(path)
    }
}

/// What the rewriter did to the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneRewrite {
    /// Nothing was rewritten (a `-p` flag may still have been removed).
    Unchanged,
    /// `params[index]` now holds `url`.
    Rewritten { index: usize, url: String },
    /// Dry-run mode: print this command line and exit successfully.
    DryRun(String),
}

/// Rewrite the first repository shorthand in `args` into a clone URL.
///
/// Never fails: arguments that match nothing are left alone.
pub fn transform_clone_args<L, D>(args: &mut Args, login: &L, dirs: &D) -> CloneRewrite
where
    L: CurrentLogin + ?Sized,
    D: DirProbe + ?Sized,
{
    if args.is_params_empty() {
        return CloneRewrite::Unchanged;
    }

    let mut transport = Transport::from_ssh(take_private_flag(args));

    let mut i = 0;
    while i < args.params.len() {
        let token = args.params[i].as_str();
        match classify(token) {
            TokenKind::ValueFlag => {
                // The flag's value is never a repository.
                i += 2;
                continue;
            }
            TokenKind::Url => {
                tracing::debug!(url = token, "clone target already a URL");
                return CloneRewrite::Unchanged;
            }
            TokenKind::Shorthand if !dirs.is_dir(token) => {
                let (name, owner) = parse_name_and_owner(token);
                let user = login.current_login();

                let owner = if owner.is_empty() {
                    transport = Transport::Ssh;
                    user
                } else {
                    if owner == user {
                        transport = Transport::Ssh;
                    }
                    owner.to_string()
                };

                let url = Project::new(name, owner).with_host(login.host()).git_url(transport);
                tracing::debug!(shorthand = token, %url, ?transport, "rewrote clone target");
                args.replace_param(i, url.clone());

                if args.noop {
                    return CloneRewrite::DryRun(args.to_command_line());
                }
                return CloneRewrite::Rewritten { index: i, url };
            }
            TokenKind::Shorthand => {
                tracing::debug!(path = token, "shorthand names a local directory, skipping");
            }
            TokenKind::Other => {}
        }
        i += 1;
    }

    CloneRewrite::Unchanged
}

fn take_private_flag(args: &mut Args) -> bool {
    args.index_of_param(PRIVATE_FLAG).and_then(|i| args.remove_param(i)).is_some()
}

/// Split `owner/name` on the first `/`. A bare `name` yields an empty owner.
pub fn parse_name_and_owner(token: &str) -> (&str, &str) {
    match token.split_once('/') {
        Some((owner, name)) => (name, owner),
        None => (token, ""),
    }
}
