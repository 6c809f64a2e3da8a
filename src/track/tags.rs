use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use lofty::id3::v2::{Frame, FrameId, Id3v2Tag, TextInformationFrame};
use lofty::ogg::VorbisComments;
use regex::Regex;
use tracing::warn;

use super::mapping::{self, TagFamily};
use super::source::AudioSource;
use crate::error::{Error, Result};

static NUMBER_TOTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("number/total pattern is valid"));

/// Tag values of a track, keyed by canonical tag name.
///
/// Every value list is ordered; a name with no values reads as an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<&'static str, Vec<String>>);

impl Tags {
    pub(crate) fn from_source(path: &Path, source: &AudioSource) -> Result<Self> {
        match source {
            AudioSource::Flac(file) => Ok(Self::from_vorbis(file.vorbis_comments())),
            AudioSource::Mp3 { file, .. } => Ok(Self::from_id3(path, file.id3v2())),
            AudioSource::Unsupported => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Union of every mapped field per name, blanks dropped, duplicates removed
    /// keeping first-seen order.
    fn from_vorbis(comments: Option<&VorbisComments>) -> Self {
        let mut tags = BTreeMap::new();

        for name in mapping::canonical_names(TagFamily::Flac) {
            let mut values: Vec<String> = Vec::new();
            if let Some(comments) = comments {
                for field in mapping::sources(TagFamily::Flac, name) {
                    for value in comments.get_all(field) {
                        if !value.is_empty() && !values.iter().any(|v| v == value) {
                            values.push(value.to_string());
                        }
                    }
                }
            }
            tags.insert(name, values);
        }

        Self(tags)
    }

    /// First value of each mapped frame, in mapping order, then `disc`/`track`
    /// split into number and total.
    fn from_id3(path: &Path, tag: Option<&Id3v2Tag>) -> Self {
        let mut tags = BTreeMap::new();

        for name in mapping::canonical_names(TagFamily::Id3) {
            let mut values = Vec::new();
            if let Some(tag) = tag {
                for field in mapping::sources(TagFamily::Id3, name) {
                    if let Some(value) = first_text(tag, field) {
                        values.push(value);
                    }
                }
            }
            tags.insert(name, values);
        }

        split_number_total(&mut tags, path, "disc", "totaldiscs");
        split_number_total(&mut tags, path, "track", "totaltracks");

        Self(tags)
    }

    /// Values for `name`, empty if the tag is absent.
    pub fn get(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names with at least one value, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (*k, v.as_slice()))
    }
}

// ID3v2.4 stores multiple values in one frame separated by NUL.
// TDRC is parsed into a timestamp frame rather than a text frame.
fn first_text(tag: &Id3v2Tag, field: &str) -> Option<String> {
    let id = FrameId::new(field).ok()?;
    match tag.get(&id)? {
        Frame::Text(TextInformationFrame { value, .. }) => value
            .split('\0')
            .find(|v| !v.is_empty())
            .map(str::to_string),
        Frame::Timestamp(frame) => Some(frame.timestamp.to_string()),
        _ => None,
    }
}

/// Replace `field = ["n/t"]` with `field = ["n"]`, `total = ["t"]`.
///
/// A value that does not match drops `field` entirely rather than guessing.
fn split_number_total(
    tags: &mut BTreeMap<&'static str, Vec<String>>,
    path: &Path,
    field: &'static str,
    total: &'static str,
) {
    let Some(raw) = tags.get(field).and_then(|v| v.first()).cloned() else {
        return;
    };

    match NUMBER_TOTAL.captures(raw.trim()) {
        Some(caps) => {
            tags.insert(field, vec![caps[1].to_string()]);
            tags.insert(total, vec![caps[2].to_string()]);
        }
        None => {
            tags.remove(field);
            let err = Error::MalformedTagValue {
                path: path.to_path_buf(),
                field,
                value: raw,
            };
            warn!(error = %err, "dropping tag field");
        }
    }
}
