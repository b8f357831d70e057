//! WAV decoding to normalized float samples.
//!
//! Two paths share the same numeric conversion:
//!
//! - [`decode`] / [`decode_bytes`] — fixed-offset fast path. It reads the
//!   channel count at byte 22 and the sample region from byte 44, the
//!   standard positions in a canonical 44-byte-header PCM file. Input must
//!   be canonical (self-produced by this crate's encoder or guaranteed
//!   equivalent); it does not walk RIFF sub-chunks, so a foreign file with
//!   extra chunks belongs on the strict path instead.
//! - [`decode_strict`] / [`decode_strict_bytes`] — validates the canonical
//!   header (tags, PCM profile, declared sizes) before converting, rejecting
//!   anything this crate's encoder could not have produced.
//!
//! Mono samples map to `sample / 32767.0`, clamped to `[-1.0, 1.0]`. Stereo
//! frames downmix to one value per frame by averaging the pair. Channel
//! counts other than 1 or 2 fail with
//! [`UnsupportedChannels`](WavError::UnsupportedChannels) rather than being
//! mis-decoded by the pairwise average.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{WavError, WavResult};
use crate::format::{WavInfo, HEADER_LEN};

/// Byte offset of the channel-count field in the canonical header.
const CHANNELS_OFFSET: usize = 22;

/// Full-scale divisor for 16-bit samples.
const PCM_SCALE: f32 = 32767.0;

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn check_header_len(data: &[u8]) -> WavResult<()> {
    if data.len() < HEADER_LEN {
        return Err(WavError::TooShort {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Converts a raw little-endian sample region to normalized mono frames.
fn convert_samples(pcm: &[u8], channels: u16) -> WavResult<Vec<f32>> {
    match channels {
        1 => {
            if pcm.len() % 2 != 0 {
                return Err(WavError::TruncatedData {
                    len: pcm.len(),
                    frame: 2,
                });
            }
            Ok(pcm
                .chunks_exact(2)
                .map(|c| {
                    let sample = i16::from_le_bytes([c[0], c[1]]);
                    (sample as f32 / PCM_SCALE).clamp(-1.0, 1.0)
                })
                .collect())
        }
        2 => {
            if pcm.len() % 4 != 0 {
                return Err(WavError::TruncatedData {
                    len: pcm.len(),
                    frame: 4,
                });
            }
            Ok(pcm
                .chunks_exact(4)
                .map(|frame| {
                    // Sum in i32 so a full-scale pair cannot wrap.
                    let left = i16::from_le_bytes([frame[0], frame[1]]) as i32;
                    let right = i16::from_le_bytes([frame[2], frame[3]]) as i32;
                    ((left + right) as f32 / PCM_SCALE / 2.0).clamp(-1.0, 1.0)
                })
                .collect())
        }
        channels => Err(WavError::UnsupportedChannels { channels }),
    }
}

/// Decodes a canonical WAV byte buffer into normalized mono samples.
///
/// Fast path: fixed header offsets, no chunk validation. See the module docs
/// for the canonical-input precondition.
///
/// # Errors
/// [`WavError::TooShort`] when the buffer cannot hold a header,
/// [`WavError::TruncatedData`] when the sample region is not a whole number
/// of frames, [`WavError::UnsupportedChannels`] for channel counts other
/// than 1 or 2.
pub fn decode_bytes(data: &[u8]) -> WavResult<Vec<f32>> {
    check_header_len(data)?;
    let channels = read_u16(data, CHANNELS_OFFSET);
    convert_samples(&data[HEADER_LEN..], channels)
}

/// Reads `source` to the end and decodes it as a canonical WAV file.
pub fn decode<R: Read>(source: &mut R) -> WavResult<Vec<f32>> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    decode_bytes(&data)
}

/// Reads and decodes the canonical WAV file at `path`.
pub fn decode_file<P: AsRef<Path>>(path: P) -> WavResult<Vec<f32>> {
    decode_bytes(&fs::read(path)?)
}

fn check_tag(data: &[u8], offset: usize, tag: &'static str) -> WavResult<()> {
    if &data[offset..offset + 4] != tag.as_bytes() {
        return Err(WavError::BadTag {
            offset,
            expected: tag,
        });
    }
    Ok(())
}

/// Validates the canonical 44-byte header and returns its metadata.
fn parse_canonical_header(data: &[u8]) -> WavResult<WavInfo> {
    check_header_len(data)?;

    check_tag(data, 0, "RIFF")?;
    check_tag(data, 8, "WAVE")?;
    check_tag(data, 12, "fmt ")?;
    check_tag(data, 36, "data")?;

    let fmt_size = read_u32(data, 16);
    if fmt_size != 16 {
        return Err(WavError::UnsupportedFormat {
            field: "fmt chunk size",
            value: fmt_size,
            expected: 16,
        });
    }

    let format_code = read_u16(data, 20);
    if format_code != 1 {
        return Err(WavError::UnsupportedFormat {
            field: "audio format code",
            value: format_code as u32,
            expected: 1,
        });
    }

    let channels = read_u16(data, CHANNELS_OFFSET);
    if channels != 1 && channels != 2 {
        return Err(WavError::UnsupportedChannels { channels });
    }

    let sample_rate = read_u32(data, 24);

    let bits_per_sample = read_u16(data, 34);
    if bits_per_sample != 16 {
        return Err(WavError::UnsupportedFormat {
            field: "bits per sample",
            value: bits_per_sample as u32,
            expected: 16,
        });
    }

    let riff_size = read_u32(data, 4) as usize;
    if riff_size != data.len() - 8 {
        return Err(WavError::LengthMismatch {
            field: "RIFF chunk",
            declared: riff_size,
            actual: data.len() - 8,
        });
    }

    let data_size = read_u32(data, 40) as usize;
    let actual = data.len() - HEADER_LEN;
    if data_size != actual {
        return Err(WavError::LengthMismatch {
            field: "sample data",
            declared: data_size,
            actual,
        });
    }

    Ok(WavInfo {
        sample_rate,
        channels,
        bits_per_sample,
        num_frames: actual / (2 * channels as usize),
    })
}

/// Validates that `data` is a canonical PCM WAV file, then decodes it.
///
/// Accepts exactly the shape this crate's encoder produces: fixed tag
/// positions, a 16-byte `fmt ` chunk, PCM format code, 16 bits per sample,
/// and size fields that agree with the actual byte length.
pub fn decode_strict_bytes(data: &[u8]) -> WavResult<Vec<f32>> {
    let info = parse_canonical_header(data)?;
    convert_samples(&data[HEADER_LEN..], info.channels)
}

/// Reads `source` to the end, validates it, then decodes it.
pub fn decode_strict<R: Read>(source: &mut R) -> WavResult<Vec<f32>> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    decode_strict_bytes(&data)
}

/// Reads canonical-header metadata without converting samples.
pub fn inspect(data: &[u8]) -> WavResult<WavInfo> {
    parse_canonical_header(data)
}
