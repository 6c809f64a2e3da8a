use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagshelf/config.toml` or `~/.config/tagshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGSHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    /// Emit one element per line. When false the document is a single line.
    pub pretty: bool,
    /// Write the document here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            indent: 2,
            pretty: true,
            output: None,
        }
    }
}
