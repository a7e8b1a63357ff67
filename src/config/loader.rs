//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{ConfigError, GitHubConfig};
use crate::github::DEFAULT_HOST;
use crate::utils::paths::default_config_path;

/// Names a config file to use instead of the discovered one.
pub const CONFIG_PATH_ENV: &str = "GH_CONFIG";
pub const USER_ENV: &str = "GITHUB_USER";
pub const HOST_ENV: &str = "GITHUB_HOST";

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    user: Option<String>,
    host: Option<String>,
}

/// Load the GitHub config using the process environment.
pub fn load_config(explicit: Option<&Path>) -> Result<GitHubConfig, ConfigError> {
    load_config_with(explicit, |key| std::env::var(key).ok())
}

/// Load the GitHub config, reading environment variables through `env`.
///
/// An explicit path (argument or `GH_CONFIG`) must exist and parse. A
/// discovered file that fails to parse is logged and ignored.
pub fn load_config_with<E>(explicit: Option<&Path>, env: E) -> Result<GitHubConfig, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let explicit =
        explicit.map(Path::to_path_buf).or_else(|| var(CONFIG_PATH_ENV).map(PathBuf::from));
    let discovered = default_config_path(&env);

    let file = match (&explicit, &discovered) {
        (Some(path), _) => read_config_file(path)?,
        (None, Some(path)) if path.is_file() => match read_config_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("Ignoring auto-discovered config {}: {}", path.display(), e);
                FileConfig::default()
            }
        },
        _ => FileConfig::default(),
    };

    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let user = var(USER_ENV).or_else(|| non_empty(file.user)).ok_or_else(|| {
        let searched = explicit
            .or(discovered)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "the gh config file".to_string());
        ConfigError::MissingUser { searched }
    })?;

    Ok(GitHubConfig {
        user,
        host: var(HOST_ENV)
            .or_else(|| non_empty(file.host))
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
    })
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse_config(&content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Parse TOML config, accepting keys at the top level or under `[github]`.
fn parse_config(content: &str) -> Result<FileConfig, toml::de::Error> {
    let raw: toml::Table = toml::from_str(content)?;
    let value = match raw.get("github") {
        Some(nested) => nested.clone(),
        None => toml::Value::Table(raw),
    };
    value.try_into()
}
