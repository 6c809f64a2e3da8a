use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::info::Info;
use super::source::AudioSource;
use super::tags::Tags;
use crate::error::{Error, Result};

/// An audio file with the stream info and tags read from it.
///
/// `last_modification` is the file's mtime as of the last successful read;
/// a differing on-disk mtime marks the track stale.
#[derive(Debug, Clone)]
pub struct Track {
    path: PathBuf,
    last_modification: SystemTime,
    info: Info,
    tags: Tags,
}

impl Track {
    /// Read `path` and build its info and tags.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let (last_modification, info, tags) = read(&path)?;
        Ok(Self {
            path,
            last_modification,
            info,
            tags,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_modification(&self) -> SystemTime {
        self.last_modification
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Whether the file's current mtime differs from the one last read.
    ///
    /// A file that can no longer be stat'ed counts as changed.
    pub fn has_changed(&self) -> bool {
        match modified(&self.path) {
            Ok(mtime) => mtime != self.last_modification,
            Err(_) => true,
        }
    }

    /// Re-read the file if it changed. Returns whether a re-read happened.
    ///
    /// On error the track is left as it was; callers drop it.
    pub fn refresh(&mut self) -> Result<bool> {
        if !self.has_changed() {
            return Ok(false);
        }

        debug!(path = %self.path.display(), "re-reading changed track");
        let (last_modification, info, tags) = read(&self.path)?;
        self.last_modification = last_modification;
        self.info = info;
        self.tags = tags;
        Ok(true)
    }
}

// mtime is taken before parsing so a write racing the read leaves the track stale.
fn read(path: &Path) -> Result<(SystemTime, Info, Tags)> {
    let mtime = modified(path)?;
    let source = AudioSource::open(path)?;
    let info = Info::from_source(path, &source)?;
    let tags = Tags::from_source(path, &source)?;
    Ok((mtime, info, tags))
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::io(path, e))
}
