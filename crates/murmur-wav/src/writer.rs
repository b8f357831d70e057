//! Canonical WAV encoding.
//!
//! This module serializes 16-bit PCM samples into the fixed 44-byte
//! RIFF/WAVE container. Output carries no timestamps or variable metadata,
//! so the same samples always encode to the same bytes and the PCM payload
//! can be content-addressed with [`pcm_hash`].

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{WavError, WavResult};
use crate::format::{WavFormat, HEADER_LEN};

/// Builds the canonical 44-byte header for a file of `total_len` bytes.
///
/// `total_len` is the intended size of the complete file, header included.
///
/// # Errors
/// [`WavError::InvalidLength`] when `total_len` is too small to hold the
/// header (no header can describe a negative-length data section).
pub fn header_bytes(format: &WavFormat, total_len: usize) -> WavResult<[u8; HEADER_LEN]> {
    if total_len < HEADER_LEN {
        return Err(WavError::InvalidLength { length: total_len });
    }

    let riff_size = (total_len - 8) as u32;
    let data_size = (total_len - HEADER_LEN) as u32;

    let mut header = [0u8; HEADER_LEN];

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    Ok(header)
}

/// Converts samples to raw little-endian PCM bytes.
pub fn samples_to_pcm(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Encodes samples as a complete WAV file and writes it to `sink`.
///
/// The sink receives exactly `44 + 2 * samples.len()` bytes: the canonical
/// header for the default capture profile followed by the samples in
/// little-endian order.
///
/// # Errors
/// Any I/O failure on the sink propagates as [`WavError::Io`]. No partial
/// write recovery is attempted.
pub fn encode<W: Write>(sink: &mut W, samples: &[i16]) -> WavResult<()> {
    let total_len = HEADER_LEN + samples.len() * 2;
    // total_len >= HEADER_LEN for any sample count, so the length guard
    // inside header_bytes cannot fire here.
    let header = header_bytes(&WavFormat::default(), total_len)?;

    sink.write_all(&header)?;
    sink.write_all(&samples_to_pcm(samples))?;
    Ok(())
}

/// Encodes samples to a complete WAV file in a byte vector.
pub fn encode_to_vec(samples: &[i16]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + samples.len() * 2);
    encode(&mut buffer, samples).expect("writing to Vec should not fail");
    buffer
}

/// Encodes samples and writes the complete WAV file at `path`.
pub fn encode_to_file<P: AsRef<Path>>(path: P, samples: &[i16]) -> WavResult<()> {
    fs::write(path, encode_to_vec(samples))?;
    Ok(())
}

/// Returns the BLAKE3 hash of the PCM payload `samples` encode to.
///
/// The digest covers the sample bytes only, not the header, so it identifies
/// the audio content independent of container bookkeeping.
pub fn pcm_hash(samples: &[i16]) -> String {
    blake3::hash(&samples_to_pcm(samples)).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_for_empty_payload() {
        let header = header_bytes(&WavFormat::default(), 44).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(b"RIFF");
        expected.extend_from_slice(&36u32.to_le_bytes());
        expected.extend_from_slice(b"WAVE");
        expected.extend_from_slice(b"fmt ");
        expected.extend_from_slice(&16u32.to_le_bytes());
        expected.extend_from_slice(&1u16.to_le_bytes());
        expected.extend_from_slice(&1u16.to_le_bytes());
        expected.extend_from_slice(&16000u32.to_le_bytes());
        expected.extend_from_slice(&32000u32.to_le_bytes());
        expected.extend_from_slice(&2u16.to_le_bytes());
        expected.extend_from_slice(&16u16.to_le_bytes());
        expected.extend_from_slice(b"data");
        expected.extend_from_slice(&0u32.to_le_bytes());

        assert_eq!(header.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_header_rejects_short_total_length() {
        let err = header_bytes(&WavFormat::default(), 10).unwrap_err();
        assert!(matches!(err, WavError::InvalidLength { length: 10 }));
    }

    #[test]
    fn test_header_size_fields() {
        let header = header_bytes(&WavFormat::default(), 16016).unwrap();

        let riff_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
        assert_eq!(riff_size, 16008);

        let data_size = u32::from_le_bytes([header[40], header[41], header[42], header[43]]);
        assert_eq!(data_size, 15972);
    }

    #[test]
    fn test_encode_byte_layout() {
        let wav = encode_to_vec(&[1, -2, 3]);

        assert_eq!(wav.len(), 50);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // Samples follow the header in little-endian order.
        assert_eq!(&wav[44..50], &[1, 0, 0xFE, 0xFF, 3, 0]);
    }

    #[test]
    fn test_encode_8000_samples_is_16016_bytes() {
        let samples = vec![0i16; 8000];
        let wav = encode_to_vec(&samples);
        assert_eq!(wav.len(), 16016);

        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 16000);
    }

    #[test]
    fn test_encode_writes_through_sink() {
        let mut sink = Vec::new();
        encode(&mut sink, &[0i16; 5]).unwrap();
        assert_eq!(sink.len(), 54);
        assert_eq!(sink, encode_to_vec(&[0i16; 5]));
    }

    #[test]
    fn test_samples_to_pcm() {
        let pcm = samples_to_pcm(&[0, 32767, -32768]);
        assert_eq!(pcm, vec![0, 0, 0xFF, 0x7F, 0x00, 0x80]);
    }

    #[test]
    fn test_pcm_hash_determinism() {
        let samples = vec![100i16, -200, 300, -400];

        let hash1 = pcm_hash(&samples);
        let hash2 = pcm_hash(&samples);

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // BLAKE3 produces 64 hex chars
    }

    #[test]
    fn test_pcm_hash_tracks_content() {
        assert_ne!(pcm_hash(&[1, 2, 3]), pcm_hash(&[1, 2, 4]));
    }
}
