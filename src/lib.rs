//! Scan a music directory for FLAC and MP3 files and export their tags and
//! stream info as an XML document.
//!
//! ```no_run
//! use tagshelf::{Library, config::LibrarySettings};
//!
//! let mut library = Library::from_path("/music", LibrarySettings::default());
//! println!("{}", library.to_xml()?);
//!
//! // Later: pick up deletions, edits and new files.
//! let report = library.refresh();
//! println!("{} added, {} removed", report.added, report.removed);
//! # Ok::<(), tagshelf::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod track;

pub use error::{Error, Result};
pub use library::{Library, RefreshReport};
pub use track::{Info, InfoValue, Tags, Track};

#[cfg(test)]
pub(crate) mod test_support;
