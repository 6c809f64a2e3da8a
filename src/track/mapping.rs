//! Static table from canonical tag names to the source fields that carry them.
//!
//! A canonical name may be fed by several source fields (two legacy spellings
//! of the same concept); readers must collect from all of them.

/// The metadata schema a file's tags are stored in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagFamily {
    /// FLAC Vorbis comments; field names are matched case-insensitively.
    Flac,
    /// MP3 ID3v2 frames, by four-character frame ID.
    Id3,
}

struct FieldMapping {
    name: &'static str,
    flac: &'static [&'static str],
    id3: &'static [&'static str],
}

const FIELDS: &[FieldMapping] = &[
    FieldMapping { name: "album", flac: &["ALBUM"], id3: &["TALB"] },
    FieldMapping { name: "albumartist", flac: &["ALBUMARTIST"], id3: &["TPE2"] },
    FieldMapping { name: "albumartistsort", flac: &["ALBUMARTISTSORT"], id3: &["TSO2"] },
    FieldMapping { name: "albumsort", flac: &["ALBUMSORT"], id3: &["TSOA"] },
    FieldMapping { name: "artist", flac: &["ARTIST"], id3: &["TPE1"] },
    FieldMapping { name: "artistsort", flac: &["ARTISTSORT"], id3: &["TSOP"] },
    FieldMapping { name: "composer", flac: &["COMPOSER"], id3: &["TCOM"] },
    FieldMapping { name: "composersort", flac: &["COMPOSERSORT"], id3: &["TSOC"] },
    FieldMapping { name: "date", flac: &["DATE"], id3: &["TDRC", "TYER"] },
    FieldMapping { name: "disc", flac: &["DISCNUMBER"], id3: &["TPOS"] },
    FieldMapping { name: "genre", flac: &["GENRE"], id3: &["TCON"] },
    FieldMapping { name: "title", flac: &["TITLE"], id3: &["TIT2"] },
    FieldMapping { name: "titlesort", flac: &["TITLESORT"], id3: &["TSOT"] },
    // ID3 has no frame of its own for the totals: they come from splitting TPOS/TRCK.
    FieldMapping { name: "totaldiscs", flac: &["TOTALDISCS", "DISCTOTAL"], id3: &[] },
    FieldMapping { name: "totaltracks", flac: &["TOTALTRACKS", "TRACKTOTAL"], id3: &[] },
    FieldMapping { name: "track", flac: &["TRACKNUMBER"], id3: &["TRCK"] },
];

impl FieldMapping {
    fn sources(&self, family: TagFamily) -> &'static [&'static str] {
        match family {
            TagFamily::Flac => self.flac,
            TagFamily::Id3 => self.id3,
        }
    }
}

/// Canonical names that have at least one source field in `family`.
pub fn canonical_names(family: TagFamily) -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(move |f| !f.sources(family).is_empty())
        .map(|f| f.name)
}

/// Source fields for `name` in `family`, in lookup order. Empty for unknown names.
pub fn sources(family: TagFamily, name: &str) -> &'static [&'static str] {
    FIELDS
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.sources(family))
        .unwrap_or(&[])
}
