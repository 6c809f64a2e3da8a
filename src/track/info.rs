use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use lofty::file::AudioFile;

use super::source::AudioSource;
use crate::error::{Error, Result};

/// A single stream property value.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoValue {
    Text(String),
    Integer(u64),
    /// Seconds, for `length`.
    Float(f64),
}

impl InfoValue {
    /// Empty text and zero numbers carry no information and are left out of exports.
    pub fn is_empty(&self) -> bool {
        match self {
            InfoValue::Text(s) => s.is_empty(),
            InfoValue::Integer(n) => *n == 0,
            InfoValue::Float(f) => *f == 0.0,
        }
    }
}

impl fmt::Display for InfoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoValue::Text(s) => f.write_str(s),
            InfoValue::Integer(n) => write!(f, "{n}"),
            InfoValue::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Technical stream properties of a track, keyed by property name.
///
/// FLAC tracks carry `bits_per_sample`, MP3 tracks carry `bitrate_mode`;
/// both carry `codec`, `bitrate`, `channels`, `sample_rate` and `length`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info(BTreeMap<&'static str, InfoValue>);

impl Info {
    pub(crate) fn from_source(path: &Path, source: &AudioSource) -> Result<Self> {
        let mut info = BTreeMap::new();

        match source {
            AudioSource::Flac(file) => {
                let props = file.properties();
                let bits_per_sample = u64::from(props.bit_depth());
                let sample_rate = u64::from(props.sample_rate());

                info.insert("codec", InfoValue::Text("FLAC".to_string()));
                info.insert("bitrate", InfoValue::Integer(bits_per_sample * sample_rate));
                info.insert("channels", InfoValue::Integer(u64::from(props.channels())));
                info.insert("sample_rate", InfoValue::Integer(sample_rate));
                info.insert("bits_per_sample", InfoValue::Integer(bits_per_sample));
                info.insert("length", InfoValue::Float(props.duration().as_secs_f64()));
            }
            AudioSource::Mp3 { file, bitrate_mode } => {
                let props = file.properties();

                info.insert("codec", InfoValue::Text("MP3".to_string()));
                // The parser reports kbit/s.
                info.insert(
                    "bitrate",
                    InfoValue::Integer(u64::from(props.audio_bitrate()) * 1000),
                );
                info.insert("bitrate_mode", InfoValue::Text(bitrate_mode.to_string()));
                info.insert("channels", InfoValue::Integer(u64::from(props.channels())));
                info.insert("sample_rate", InfoValue::Integer(u64::from(props.sample_rate())));
                info.insert("length", InfoValue::Float(props.duration().as_secs_f64()));
            }
            AudioSource::Unsupported => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(Self(info))
    }

    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.0.get(key)
    }

    /// `"FLAC"` or `"MP3"`.
    pub fn codec(&self) -> Option<&str> {
        match self.0.get("codec") {
            Some(InfoValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// All properties in key order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &InfoValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}
