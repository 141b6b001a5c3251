//! wavio - PCM WAV decoding, encoding, and interpolated sample access
//!
//! wavio reads and writes uncompressed 16-bit PCM WAV files, exposing the
//! audio as per-channel sample sequences, and provides a continuous-time
//! sample accessor that interpolates between discrete samples.
//!
//! # Architecture
//!
//! - `wav`: container support (fixed 44-byte header codec, de-interleaving
//!   decode, re-interleaving encode)
//! - `buffer`: per-channel sample storage and channel layouts
//! - `interp`: fractional-index sample accessor
//! - `util`: byte-order normalization between file and host order

pub mod buffer;
pub mod error;
pub mod interp;
pub mod util;
pub mod wav;

pub use buffer::{AudioBuffer, ChannelLayout};
pub use error::{Error, Result};
pub use wav::{WavDecoder, WavEncoder};

/// wavio version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the wavio library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the wavio library with the given configuration
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt().with_env_filter(level).init();
    }

    Ok(())
}
