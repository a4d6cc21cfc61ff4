//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where the CLI's configuration file lives. Rendering
//! itself never touches the filesystem.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, CONFIG_ENV_VAR};

use std::path::{Path, PathBuf};

/// Finds the configuration file to load.
///
/// Lookup order:
/// 1. `explicit`, when given (returned even if missing, so reading it reports the error)
/// 2. The file named by `DEFORM_CONFIG`
/// 3. `$XDG_CONFIG_HOME/deform/config.toml` or `~/.config/deform/config.toml`, if it exists
///
/// # Returns
///
/// Returns `None` when no explicit path is given and no default file exists.
#[must_use]
pub fn locate_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(from_env) = std::env::var(CONFIG_ENV_VAR).ok().filter(|p| !p.is_empty()) {
        return Some(expand_tilde(&from_env));
    }

    default_config_path().filter(|path| path.is_file())
}
