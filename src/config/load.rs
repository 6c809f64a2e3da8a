use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::error::{Error, Result};

pub const MAX_INDENT: usize = 8;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment variables
/// (prefix `TAGSHELF__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TAGSHELF")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<()> {
        if self.export.indent > MAX_INDENT {
            return Err(Error::InvalidConfig(format!(
                "export.indent must be <= {MAX_INDENT}"
            )));
        }
        if self.library.max_depth == Some(0) {
            return Err(Error::InvalidConfig(
                "library.max_depth must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `TAGSHELF_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TAGSHELF_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tagshelf/config.toml`
/// or `~/.config/tagshelf/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tagshelf").join("config.toml"))
}
