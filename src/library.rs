//! A library: the tracks found under one root directory, keyed by path.
//!
//! Files that fail to read are never fatal; they are logged and left out.

mod scan;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::LibrarySettings;
use crate::error::Error;
use crate::track::Track;

/// What one [`Library::refresh`] pass changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    /// Tracks dropped because their file disappeared or could no longer be read.
    pub removed: usize,
    /// Tracks re-read because their file changed.
    pub updated: usize,
    /// Newly discovered files that imported successfully.
    pub added: usize,
}

impl RefreshReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct Library {
    path: PathBuf,
    settings: LibrarySettings,
    tracks: BTreeMap<PathBuf, Track>,
}

impl Library {
    /// An empty library rooted at `path`. Nothing is scanned yet.
    pub fn new(path: impl AsRef<Path>, settings: LibrarySettings) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self {
            path,
            settings,
            tracks: BTreeMap::new(),
        }
    }

    /// A library rooted at `path` with every readable audio file imported.
    pub fn from_path(path: impl AsRef<Path>, settings: LibrarySettings) -> Self {
        let mut library = Self::new(path, settings);
        let added = library.import_untracked_files();
        info!(root = %library.path.display(), tracks = added, "library scanned");
        library
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<&Track> {
        self.tracks.get(path)
    }

    /// Tracks in path order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Drop every track whose path is no longer a regular file. Returns how many went.
    pub fn clean_deleted_files(&mut self) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|path, _| {
            let keep = path.is_file();
            if !keep {
                debug!(path = %path.display(), "file deleted, dropping track");
            }
            keep
        });
        before - self.tracks.len()
    }

    /// Refresh every track; tracks that fail to re-read are dropped.
    ///
    /// Returns how many tracks were re-read successfully.
    pub fn refresh_tracked_files(&mut self) -> usize {
        let mut updated = 0;
        self.tracks.retain(|_, track| match track.refresh() {
            Ok(refreshed) => {
                updated += usize::from(refreshed);
                true
            }
            Err(err) => {
                warn!(error = %err, "dropping track that failed to refresh");
                false
            }
        });
        updated
    }

    /// Import every file under the root that is not tracked yet. Returns how many imported.
    pub fn import_untracked_files(&mut self) -> usize {
        let mut added = 0;
        for path in scan::walk(&self.path, &self.settings) {
            if self.tracks.contains_key(&path) {
                continue;
            }
            match Track::from_path(&path) {
                Ok(track) => {
                    debug!(path = %path.display(), "imported track");
                    self.tracks.insert(path, track);
                    added += 1;
                }
                Err(err @ Error::UnsupportedFormat { .. }) => {
                    debug!(error = %err, "skipping file");
                }
                Err(err) => {
                    warn!(error = %err, "skipping file");
                }
            }
        }
        added
    }

    /// Reconcile with the filesystem: drop deleted files, re-read changed ones,
    /// then import new ones.
    pub fn refresh(&mut self) -> RefreshReport {
        let mut report = RefreshReport {
            removed: self.clean_deleted_files(),
            ..RefreshReport::default()
        };

        let before = self.tracks.len();
        report.updated = self.refresh_tracked_files();
        report.removed += before - self.tracks.len();

        report.added = self.import_untracked_files();

        info!(
            root = %self.path.display(),
            removed = report.removed,
            updated = report.updated,
            added = report.added,
            "library refreshed"
        );
        report
    }
}
