//! Clone URL construction for GitHub projects

use super::DEFAULT_HOST;

/// Transport a clone URL is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Anonymous `git://` access.
    #[default]
    ReadOnly,
    /// Authenticated `git@host:` access, needed for private repositories.
    Ssh,
}

impl Transport {
    pub fn from_ssh(use_ssh: bool) -> Self {
        if use_ssh {
            Transport::Ssh
        } else {
            Transport::ReadOnly
        }
    }
}

/// A repository with both owner and name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub owner: String,
    pub host: String,
}

impl Project {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self { name: name.into(), owner: owner.into(), host: DEFAULT_HOST.to_string() }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn git_url(&self, transport: Transport) -> String {
        git_url(&self.name, &self.owner, transport, &self.host)
    }
}

/// Build the canonical clone URL.
///
/// - `ReadOnly` → `git://{host}/{owner}/{name}.git`
/// - `Ssh`      → `git@{host}:{owner}/{name}.git`
pub fn git_url(name: &str, owner: &str, transport: Transport, host: &str) -> String {
    match transport {
        Transport::ReadOnly => format!("git://{host}/{owner}/{name}.git"),
        Transport::Ssh => format!("git@{host}:{owner}/{name}.git"),
    }
}
