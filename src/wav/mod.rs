//! WAV container support
//!
//! This module implements decoding and encoding of uncompressed PCM WAV
//! files with the fixed 44-byte RIFF/fmt/data header layout.

pub mod decoder;
pub mod encoder;
pub mod header;

pub use decoder::WavDecoder;
pub use encoder::WavEncoder;
pub use header::{WavFormat, WavHeader};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_MAGIC: &[u8; 4] = b"fmt ";
pub const DATA_MAGIC: &[u8; 4] = b"data";
