use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading audio files, scanning a library or loading settings.
#[derive(Debug, Error)]
pub enum Error {
    /// The file is not a FLAC or MP3 stream.
    #[error("unsupported format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The file could not be opened, stat'ed or read.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tag parser rejected the stream or its tags.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    /// An ID3 `number/total` frame did not match `<digits>/<digits>`.
    ///
    /// Only the offending field is dropped; the track itself still imports.
    #[error("malformed {field} value {value:?} in {}", path.display())]
    MalformedTagValue {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    /// Writing the exported document failed.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: lofty::error::LoftyError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
