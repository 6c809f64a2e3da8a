//! Minimal FLAC and MP3 files assembled byte by byte for tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub const FLAC_SAMPLE_RATE: u32 = 44_100;
pub const FLAC_CHANNELS: u8 = 2;
pub const FLAC_BITS_PER_SAMPLE: u8 = 16;

/// A FLAC stream with a STREAMINFO block and the given Vorbis comments.
pub fn flac_bytes(comments: &[(&str, &str)]) -> Vec<u8> {
    let mut out = b"fLaC".to_vec();

    let total_samples = u64::from(FLAC_SAMPLE_RATE) * 2;
    let mut streaminfo = Vec::with_capacity(34);
    streaminfo.extend_from_slice(&4096u16.to_be_bytes());
    streaminfo.extend_from_slice(&4096u16.to_be_bytes());
    streaminfo.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    let packed = (u64::from(FLAC_SAMPLE_RATE) << 44)
        | (u64::from(FLAC_CHANNELS - 1) << 41)
        | (u64::from(FLAC_BITS_PER_SAMPLE - 1) << 36)
        | total_samples;
    streaminfo.extend_from_slice(&packed.to_be_bytes());
    streaminfo.extend_from_slice(&[0u8; 16]);

    let vendor = b"tagshelf tests";
    let mut vorbis = Vec::new();
    vorbis.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    vorbis.extend_from_slice(vendor);
    vorbis.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for (key, value) in comments {
        let entry = format!("{key}={value}");
        vorbis.extend_from_slice(&(entry.len() as u32).to_le_bytes());
        vorbis.extend_from_slice(entry.as_bytes());
    }

    push_flac_block(&mut out, 0, false, &streaminfo);
    push_flac_block(&mut out, 4, true, &vorbis);
    // A little stand-in audio; the tag reader never decodes it.
    out.extend_from_slice(&[0u8; 64]);
    out
}

fn push_flac_block(out: &mut Vec<u8>, kind: u8, last: bool, body: &[u8]) {
    let flag = if last { 0x80 } else { 0 };
    out.push(flag | kind);
    out.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
    out.extend_from_slice(body);
}

/// MPEG frames written after the ID3v2 tag.
pub const MP3_FRAME_COUNT: u32 = 8;
const MP3_FRAME_LEN: usize = 417;
// Xing/Info header offset in an MPEG-1 stereo frame: 4-byte header + 32 bytes side info.
const VBR_HEADER_OFFSET: usize = 36;

/// An ID3v2.4 tag with UTF-8 text frames followed by a few MPEG-1 Layer III frames
/// (128 kbit/s, 44.1 kHz, stereo).
pub fn mp3_bytes(frames: &[(&str, &str)]) -> Vec<u8> {
    mp3_bytes_with_header(frames, None)
}

/// Like [`mp3_bytes`], with a `Xing` or `Info` header (frame and byte counts
/// present) in the first MPEG frame.
pub fn mp3_bytes_with_header(frames: &[(&str, &str)], header: Option<&[u8; 4]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (id, text) in frames {
        let mut content = vec![0x03];
        content.extend_from_slice(text.as_bytes());
        body.extend_from_slice(id.as_bytes());
        body.extend_from_slice(&syncsafe(content.len() as u32));
        body.extend_from_slice(&[0, 0]);
        body.extend_from_slice(&content);
    }

    let mut out = b"ID3\x04\x00\x00".to_vec();
    out.extend_from_slice(&syncsafe(body.len() as u32));
    out.extend_from_slice(&body);

    for i in 0..MP3_FRAME_COUNT {
        let mut frame = vec![0xFF, 0xFB, 0x90, 0x00];
        frame.resize(MP3_FRAME_LEN, 0);
        if let (0, Some(id)) = (i, header) {
            let mut vbr = id.to_vec();
            vbr.extend_from_slice(&0x03u32.to_be_bytes());
            vbr.extend_from_slice(&MP3_FRAME_COUNT.to_be_bytes());
            vbr.extend_from_slice(&(MP3_FRAME_COUNT * MP3_FRAME_LEN as u32).to_be_bytes());
            frame[VBR_HEADER_OFFSET..VBR_HEADER_OFFSET + vbr.len()].copy_from_slice(&vbr);
        }
        out.extend_from_slice(&frame);
    }
    out
}

/// A RIFF/WAVE file: 16-bit stereo PCM at 44.1 kHz with a few silent samples.
pub fn wav_bytes() -> Vec<u8> {
    let data = [0u8; 64];
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&2u16.to_le_bytes());
    fmt.extend_from_slice(&44_100u32.to_le_bytes());
    fmt.extend_from_slice(&(44_100u32 * 4).to_le_bytes());
    fmt.extend_from_slice(&4u16.to_le_bytes());
    fmt.extend_from_slice(&16u16.to_le_bytes());

    let mut out = b"RIFF".to_vec();
    out.extend_from_slice(&((4 + 8 + fmt.len() + 8 + data.len()) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
    out.extend_from_slice(&fmt);
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&data);
    out
}

fn syncsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

pub fn write_flac(dir: &Path, name: &str, comments: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, flac_bytes(comments)).unwrap();
    path
}

pub fn write_mp3(dir: &Path, name: &str, frames: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, mp3_bytes(frames)).unwrap();
    path
}

pub fn write_vbr_mp3(dir: &Path, name: &str, frames: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, mp3_bytes_with_header(frames, Some(b"Xing"))).unwrap();
    path
}

pub fn write_wav(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, wav_bytes()).unwrap();
    path
}

/// Push the file's mtime forward so a rewrite is seen as a change on any filesystem.
pub fn bump_mtime(path: &Path) {
    let file = fs::File::options().write(true).open(path).unwrap();
    let mtime = file.metadata().unwrap().modified().unwrap();
    file.set_modified(mtime + Duration::from_secs(5)).unwrap();
}

pub fn set_mtime(path: &Path, when: SystemTime) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(when).unwrap();
}
