//! Configuration loading
//!
//! The GitHub login and host come from a TOML file and the
//! environment, with precedence Env > File.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::github::{CurrentLogin, DEFAULT_HOST};

pub mod loader;

pub use loader::{load_config, load_config_with};

/// Resolved GitHub identity for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub user: String,
    pub host: String,
}

impl GitHubConfig {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into(), host: DEFAULT_HOST.to_string() }
    }
}

impl CurrentLogin for GitHubConfig {
    fn current_login(&self) -> String {
        self.user.clone()
    }

    fn host(&self) -> String {
        self.host.clone()
    }
}

type Loader = Box<dyn Fn() -> Result<GitHubConfig, ConfigError>>;

/// Config that is loaded the first time the login or host is asked for.
///
/// `CurrentLogin` cannot fail, so a load error is kept and handed back by
/// [`LazyGitHubConfig::into_error`]. Until then an empty login is reported.
pub struct LazyGitHubConfig {
    loader: Loader,
    loaded: OnceCell<Result<GitHubConfig, ConfigError>>,
}

impl LazyGitHubConfig {
    /// Defer [`load_config`] with the process environment.
    pub fn new(explicit: Option<&Path>) -> Self {
        let explicit = explicit.map(Path::to_path_buf);
        Self::with_loader(move || load_config(explicit.as_deref()))
    }

    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> Result<GitHubConfig, ConfigError> + 'static,
    {
        Self { loader: Box::new(loader), loaded: OnceCell::new() }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// The load error, if a load was attempted and failed.
    pub fn into_error(self) -> Option<ConfigError> {
        match self.loaded.into_inner() {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    fn get(&self) -> Option<&GitHubConfig> {
        let loaded = self.loaded.get_or_init(|| {
            let result = (self.loader)();
            if let Ok(cfg) = &result {
                tracing::debug!(user = %cfg.user, host = %cfg.host, "loaded GitHub config");
            }
            result
        });
        loaded.as_ref().ok()
    }
}

impl CurrentLogin for LazyGitHubConfig {
    fn current_login(&self) -> String {
        self.get().map(|cfg| cfg.user.clone()).unwrap_or_default()
    }

    fn host(&self) -> String {
        self.get().map_or_else(|| DEFAULT_HOST.to_string(), |cfg| cfg.host.clone())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No login in the environment or in any config file.
    #[error("no GitHub login configured: set GITHUB_USER or add `user = \"<login>\"` to {searched}")]
    MissingUser { searched: String },
}
