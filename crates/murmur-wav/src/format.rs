//! WAV format profile and header metadata.
//!
//! The codec bakes a single capture profile into [`WavFormat::default`]
//! (16 kHz, mono, 16-bit PCM). Header byte layout is computed from the
//! profile, so a future profile change does not touch the layout code.

use serde::{Deserialize, Serialize};

/// Size of the canonical WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this codec).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

impl Default for WavFormat {
    /// The fixed capture profile: 16 kHz, mono, 16-bit PCM.
    fn default() -> Self {
        Self::mono(16_000)
    }
}

/// Header metadata decoded from a canonical WAV source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of audio frames in the data region.
    pub num_frames: usize,
}

impl WavInfo {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_format() {
        let mono = WavFormat::mono(16000);
        assert_eq!(mono.channels, 1);
        assert_eq!(mono.sample_rate, 16000);
        assert_eq!(mono.byte_rate(), 32000);
        assert_eq!(mono.block_align(), 2);

        let stereo = WavFormat::stereo(16000);
        assert_eq!(stereo.channels, 2);
        assert_eq!(stereo.byte_rate(), 64000);
        assert_eq!(stereo.block_align(), 4);
    }

    #[test]
    fn test_default_profile() {
        let profile = WavFormat::default();
        assert_eq!(profile, WavFormat::mono(16_000));
        assert_eq!(profile.bits_per_sample, 16);
    }

    #[test]
    fn test_duration() {
        let info = WavInfo {
            sample_rate: 16000,
            channels: 1,
            bits_per_sample: 16,
            num_frames: 8000,
        };
        assert_eq!(info.duration_seconds(), 0.5);
    }
}
