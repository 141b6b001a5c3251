//! Error types for wavio

use thiserror::Error;

/// Result type alias for wavio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wavio
#[derive(Error, Debug)]
pub enum Error {
    /// IO error other than end-of-stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fewer than the fixed 44 header bytes were available
    #[error("truncated header: fewer than 44 bytes available")]
    TruncatedHeader,

    /// RIFF or fmt chunk magic mismatch
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// End of stream reached inside a sample frame
    #[error("truncated data: stream ended inside frame {frame}")]
    TruncatedData { frame: usize },

    /// Source or destination stream unavailable
    #[error("cannot open stream: {0}")]
    CannotOpenStream(String),

    /// Declared channel count outside the supported 1..=6 range
    #[error("invalid channel count: {0} (expected 1-6)")]
    InvalidChannelCount(u16),

    /// Only 16-bit PCM samples are supported
    #[error("unsupported sample width: {bits} bits per sample")]
    UnsupportedSampleWidth { bits: u16 },

    /// Channel sequences must all hold the same number of frames
    #[error("channel length mismatch: slot {channel} has {actual} samples, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Create a malformed header error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedHeader(msg.into())
    }

    /// Create a cannot-open-stream error
    pub fn cannot_open<S: Into<String>>(msg: S) -> Self {
        Error::CannotOpenStream(msg.into())
    }
}
