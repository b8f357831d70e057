//! Error types for the WAV codec.

use thiserror::Error;

/// Result type for codec operations.
pub type WavResult<T> = Result<T, WavError>;

/// Broad failure class of a [`WavError`].
///
/// Callers that only need to decide between "bad request", "bad file", and
/// "bad device" can branch on this instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument cannot be satisfied.
    InvalidArgument,
    /// The underlying source or sink failed.
    Io,
    /// The input bytes do not form a decodable WAV file.
    Malformed,
}

/// Errors that can occur during WAV encoding and decoding.
#[derive(Debug, Error)]
pub enum WavError {
    /// Header requested for a total length shorter than the header itself.
    #[error("invalid total length: {length} bytes (a WAV file is at least 44)")]
    InvalidLength {
        /// The requested total file length.
        length: usize,
    },

    /// I/O error on the source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input too short to contain a canonical header.
    #[error("WAV data too short: expected at least {expected} bytes, got {actual}")]
    TooShort {
        /// Minimum byte length required.
        expected: usize,
        /// Byte length actually present.
        actual: usize,
    },

    /// Sample region is not a whole number of frames.
    #[error("truncated sample region: {len} bytes is not a multiple of the {frame}-byte frame size")]
    TruncatedData {
        /// Byte length of the sample region.
        len: usize,
        /// Frame size in bytes for the decoded channel count.
        frame: usize,
    },

    /// Channel count the downmix does not support.
    #[error("unsupported channel count: {channels} (only mono and stereo)")]
    UnsupportedChannels {
        /// The channel count declared in the header.
        channels: u16,
    },

    /// A fixed-position tag does not match the canonical layout.
    #[error("bad \"{expected}\" tag at byte offset {offset}")]
    BadTag {
        /// Byte offset of the tag in the header.
        offset: usize,
        /// The tag that should appear there.
        expected: &'static str,
    },

    /// A format field holds a value outside the fixed PCM profile.
    #[error("unsupported {field}: {value} (expected {expected})")]
    UnsupportedFormat {
        /// Name of the header field.
        field: &'static str,
        /// Value found in the header.
        value: u32,
        /// Value the canonical profile requires.
        expected: u32,
    },

    /// A declared size field disagrees with the actual byte length.
    #[error("header declares {declared} bytes of {field}, but {actual} bytes are present")]
    LengthMismatch {
        /// Name of the size field.
        field: &'static str,
        /// Size declared in the header.
        declared: usize,
        /// Size implied by the actual input length.
        actual: usize,
    },
}

impl WavError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WavError::InvalidLength { .. } => ErrorKind::InvalidArgument,
            WavError::Io(_) => ErrorKind::Io,
            WavError::TooShort { .. }
            | WavError::TruncatedData { .. }
            | WavError::UnsupportedChannels { .. }
            | WavError::BadTag { .. }
            | WavError::UnsupportedFormat { .. }
            | WavError::LengthMismatch { .. } => ErrorKind::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            WavError::InvalidLength { length: 10 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            WavError::Io(std::io::Error::other("sink closed")).kind(),
            ErrorKind::Io
        );
        assert_eq!(
            WavError::TooShort {
                expected: 44,
                actual: 3
            }
            .kind(),
            ErrorKind::Malformed
        );
        assert_eq!(
            WavError::UnsupportedChannels { channels: 6 }.kind(),
            ErrorKind::Malformed
        );
    }

    #[test]
    fn test_display_messages() {
        let err = WavError::TooShort {
            expected: 44,
            actual: 12,
        };
        assert!(err.to_string().contains("at least 44"));
        assert!(err.to_string().contains("got 12"));

        let err = WavError::BadTag {
            offset: 8,
            expected: "WAVE",
        };
        assert!(err.to_string().contains("WAVE"));
        assert!(err.to_string().contains("offset 8"));
    }
}
