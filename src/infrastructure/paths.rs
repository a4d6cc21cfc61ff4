//! Path helpers for locating configuration files.
//!
//! Configuration lives under the XDG config directory, falling back to
//! `~/.config` when `XDG_CONFIG_HOME` is unset.

use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DEFORM_CONFIG";

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the deform config directory, if a home or XDG directory is known.
///
/// Resolves to `$XDG_CONFIG_HOME/deform`, else `$HOME/.config/deform`.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join("deform"))
}

/// Returns the default config file path (which may not exist).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or with no known home, are returned as-is.
///
/// # Examples
///
/// ```
/// use deform::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_are_unchanged() {
        assert_eq!(expand_tilde("relative/config.toml"), PathBuf::from("relative/config.toml"));
        assert_eq!(expand_tilde("~user/config.toml"), PathBuf::from("~user/config.toml"));
    }

    #[test]
    fn default_path_ends_with_the_config_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("deform/config.toml"));
        }
    }
}
