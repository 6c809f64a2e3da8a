//! Audio tracks: a file path plus the stream info and tags read from it.
//!
//! Files are classified once when opened (FLAC, MP3 or unsupported); the
//! info and tag readers then work from that classification.

mod info;
mod mapping;
mod model;
mod source;
mod tags;

pub use info::{Info, InfoValue};
pub use mapping::{TagFamily, canonical_names, sources};
pub use model::Track;
pub use source::BitrateMode;
pub use tags::Tags;
