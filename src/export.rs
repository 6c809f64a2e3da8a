//! XML rendering of info, tags, tracks and whole libraries.
//!
//! Documents are built with a `quick_xml::Writer`, so element text and
//! attribute values are escaped as they are written. Child elements of
//! `<info>` and `<tags>` appear in key order and only for non-empty values;
//! multi-valued tags are joined with `"; "`.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;
use crate::library::Library;
use crate::track::{Info, Tags, Track};

/// Separator between the values of a multi-valued tag.
pub const VALUE_SEPARATOR: &str = "; ";

/// Seconds since the Unix epoch with nanosecond precision, e.g. `1700000000.123456789`.
pub fn format_timestamp(time: SystemTime) -> String {
    let since = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:09}", since.as_secs(), since.subsec_nanos())
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(quick_xml::Error::from)?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn into_string(writer: Writer<Vec<u8>>) -> String {
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

fn write_info<W: Write>(writer: &mut Writer<W>, info: &Info) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("info")))?;
    for (key, value) in info.iter().filter(|(_, v)| !v.is_empty()) {
        text_element(writer, key, &value.to_string())?;
    }
    emit(writer, Event::End(BytesEnd::new("info")))
}

fn write_tags<W: Write>(writer: &mut Writer<W>, tags: &Tags) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("tags")))?;
    for (name, values) in tags.iter() {
        text_element(writer, name, &values.join(VALUE_SEPARATOR))?;
    }
    emit(writer, Event::End(BytesEnd::new("tags")))
}

fn write_track<W: Write>(writer: &mut Writer<W>, track: &Track) -> Result<()> {
    let path = track.path().to_string_lossy();
    let last_modification = format_timestamp(track.last_modification());

    let start = BytesStart::new("track").with_attributes([
        ("path", &*path),
        ("last_modification", last_modification.as_str()),
    ]);
    emit(writer, Event::Start(start))?;
    write_info(writer, track.info())?;
    write_tags(writer, track.tags())?;
    emit(writer, Event::End(BytesEnd::new("track")))
}

impl Info {
    /// `<info>` with one child per non-empty property.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_info(&mut writer, self)?;
        Ok(into_string(writer))
    }
}

impl Tags {
    /// `<tags>` with one child per tag that has values.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_tags(&mut writer, self)?;
        Ok(into_string(writer))
    }
}

impl Track {
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_track(&mut writer, self)?;
        Ok(into_string(writer))
    }
}

impl Library {
    /// The whole library on one line, stamped with the current time.
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(Utc::now(), None)
    }

    /// The whole library with an explicit export time. Tracks appear in path order.
    ///
    /// With `indent`, every element starts on its own line, nested by that many spaces.
    pub fn to_xml_with(&self, export_time: DateTime<Utc>, indent: Option<usize>) -> Result<String> {
        let mut writer = match indent {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };

        let path = self.path().to_string_lossy();
        let export_time = export_time.to_rfc3339_opts(SecondsFormat::Secs, true);

        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        let start = BytesStart::new("library").with_attributes([
            ("path", &*path),
            ("export_time", export_time.as_str()),
        ]);
        emit(&mut writer, Event::Start(start))?;
        for track in self.tracks() {
            write_track(&mut writer, track)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("library")))?;

        Ok(into_string(writer))
    }
}
