use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Every regular file under `dir`, in walk order.
///
/// No extension filter is applied: whether a file is audio is decided by
/// reading it. Unreadable entries are logged and skipped.
pub(crate) fn walk(dir: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }

    files
}
