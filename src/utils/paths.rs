//! Per-user configuration locations

use std::path::PathBuf;

/// Root directory for per-user configuration.
///
/// `XDG_CONFIG_HOME`, else `$HOME/.config`; `APPDATA` on Windows. `env` looks
/// up a variable by name so callers can substitute the process environment.
pub fn config_root_dir<E>(env: E) -> Option<PathBuf>
where
    E: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    #[cfg(target_os = "windows")]
    {
        non_empty("APPDATA").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        non_empty("HOME").map(|home| PathBuf::from(home).join(".config"))
    }
}

/// `<config root>/gh/config.toml`
pub fn default_config_path<E>(env: E) -> Option<PathBuf>
where
    E: Fn(&str) -> Option<String>,
{
    config_root_dir(env).map(|root| root.join("gh").join("config.toml"))
}
