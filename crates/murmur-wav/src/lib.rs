//! murmur WAV codec
//!
//! This crate implements the canonical PCM WAV container codec for the
//! murmur speech capture pipeline.
//!
//! # Overview
//!
//! Microphone captures arrive as 16-bit signed PCM sample buffers and leave
//! as canonical RIFF/WAVE files; recorded files come back as normalized
//! `f32` buffers ready for a speech model, with stereo downmixed to mono.
//! The container profile is fixed (16 kHz, mono, 16-bit PCM) and lives in
//! [`WavFormat::default`], so the byte-layout code never hard-codes it.
//!
//! Both directions are synchronous, whole-buffer operations: one bounded
//! read or write, then pure in-memory transformation. The codec keeps no
//! state between calls.
//!
//! # Determinism
//!
//! Encoding writes no timestamps or variable metadata. The same samples
//! always produce byte-identical output, and [`pcm_hash`] digests the PCM
//! payload (BLAKE3) so recordings can be content-addressed and compared
//! without parsing the container.
//!
//! # Canonical-input precondition
//!
//! [`decode`] trusts the fixed 44-byte header layout this crate's encoder
//! emits; it reads the channel count and sample region at fixed offsets and
//! never walks RIFF sub-chunks. Feed it self-produced files. For input that
//! is not guaranteed canonical, [`decode_strict`] validates the header
//! first and rejects anything else, and [`inspect`] reports what a file
//! claims to contain.
//!
//! # Example
//!
//! ```
//! use murmur_wav::{decode_bytes, encode_to_vec, pcm_hash};
//!
//! let samples: Vec<i16> = vec![0, 8192, -8192, 32767];
//! let wav = encode_to_vec(&samples);
//! assert_eq!(wav.len(), 44 + 2 * samples.len());
//!
//! let restored = decode_bytes(&wav).unwrap();
//! assert_eq!(restored.len(), samples.len());
//! assert_eq!(restored[3], 1.0);
//!
//! // Content digest is stable across runs.
//! assert_eq!(pcm_hash(&samples), pcm_hash(&samples));
//! ```
//!
//! # Crate Structure
//!
//! - [`writer`] - header builder and WAV encoding
//! - [`reader`] - fast and strict decoding to normalized floats
//! - [`format`] - format profile and header metadata
//! - [`error`] - codec error types

pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

// Re-export main types at crate root
pub use error::{ErrorKind, WavError, WavResult};
pub use format::{WavFormat, WavInfo, HEADER_LEN};
pub use reader::{decode, decode_bytes, decode_file, decode_strict, decode_strict_bytes, inspect};
pub use writer::{encode, encode_to_file, encode_to_vec, header_bytes, pcm_hash};
