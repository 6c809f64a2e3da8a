use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::{AudioFile, FileType};
use lofty::flac::FlacFile;
use lofty::mpeg::MpegFile;
use lofty::probe::Probe;

use crate::error::{Error, Result};

/// How an MP3 stream's bitrate is laid out, as announced by its first frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitrateMode {
    Cbr,
    Vbr,
    Unknown,
}

impl fmt::Display for BitrateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BitrateMode::Cbr => "CBR",
            BitrateMode::Vbr => "VBR",
            BitrateMode::Unknown => "UNKNOWN",
        })
    }
}

/// A parsed audio file, classified once when it is opened.
pub(crate) enum AudioSource {
    Flac(FlacFile),
    Mp3 {
        file: MpegFile,
        bitrate_mode: BitrateMode,
    },
    Unsupported,
}

impl AudioSource {
    /// Detect the format of `path` by content (the extension is only a fallback hint) and parse it.
    ///
    /// The file handle is dropped before returning, on success and on error.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file_type = Probe::open(path)
            .map_err(|e| Error::parse(path, e))?
            .guess_file_type()
            .map_err(|e| Error::io(path, e))?
            .file_type();

        match file_type {
            Some(FileType::Flac) => {
                let mut reader = open_reader(path)?;
                let file = FlacFile::read_from(&mut reader, ParseOptions::new())
                    .map_err(|e| Error::parse(path, e))?;
                Ok(AudioSource::Flac(file))
            }
            Some(FileType::Mpeg) => {
                let mut reader = open_reader(path)?;
                let file = MpegFile::read_from(&mut reader, ParseOptions::new())
                    .map_err(|e| Error::parse(path, e))?;
                let bitrate_mode = sniff_bitrate_mode(&mut reader).map_err(|e| Error::io(path, e))?;
                Ok(AudioSource::Mp3 { file, bitrate_mode })
            }
            _ => Ok(AudioSource::Unsupported),
        }
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io(path, e))
}

// Bytes after the first frame sync in which a Xing/Info/VBRI header may start.
const VBR_HEADER_WINDOW: usize = 64;
const FRAME_SEARCH_LIMIT: u64 = 8192;

const XING: &[u8] = b"Xing";
const INFO: &[u8] = b"Info";
const VBRI: &[u8] = b"VBRI";

/// Look for a VBR header in the first MPEG frame after any ID3v2 tag.
pub(crate) fn sniff_bitrate_mode<R: Read + Seek>(reader: &mut R) -> std::io::Result<BitrateMode> {
    reader.seek(SeekFrom::Start(0))?;

    let mut header = [0u8; 10];
    let mut start = 0u64;
    if read_up_to(reader, &mut header)? == header.len() && &header[..3] == b"ID3" {
        let size = header[6..10]
            .iter()
            .fold(0u64, |acc, b| (acc << 7) | u64::from(b & 0x7F));
        let footer = if header[5] & 0x10 != 0 { 10 } else { 0 };
        start = 10 + size + footer;
    }

    reader.seek(SeekFrom::Start(start))?;
    let mut buf = Vec::new();
    reader.by_ref().take(FRAME_SEARCH_LIMIT).read_to_end(&mut buf)?;

    let Some(sync) = buf
        .windows(2)
        .position(|w| w[0] == 0xFF && w[1] & 0xE0 == 0xE0)
    else {
        return Ok(BitrateMode::Unknown);
    };

    let end = (sync + VBR_HEADER_WINDOW).min(buf.len());
    let frame = &buf[sync..end];
    let has = |tag: &[u8]| frame.windows(tag.len()).any(|w| w == tag);

    Ok(if has(XING) || has(VBRI) {
        BitrateMode::Vbr
    } else if has(INFO) {
        BitrateMode::Cbr
    } else {
        BitrateMode::Unknown
    })
}

fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
