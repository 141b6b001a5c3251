//! Byte-order normalization between file order and host order
//!
//! WAV files are little-endian throughout: every multi-byte header field and
//! every 16-bit sample word. A [`Normalizer`] converts such values between
//! the file representation and the host-native one. On a little-endian host
//! the conversion is the identity; on a big-endian host it reverses byte
//! order. Applying it twice returns the original value, so the same function
//! serves both the decode and encode directions.
//!
//! The host byte order is probed once at first use and carried as a value
//! into the codec structs, rather than selected with a compile-time switch.

use std::sync::OnceLock;

/// Byte order of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

static HOST: OnceLock<Endianness> = OnceLock::new();

impl Endianness {
    /// Byte order of the running process, probed once.
    pub fn host() -> Self {
        *HOST.get_or_init(|| {
            // On a little-endian host the low-order byte lands first in memory.
            if 1u16.to_ne_bytes()[0] == 1 {
                Endianness::Little
            } else {
                Endianness::Big
            }
        })
    }
}

/// Converts multi-byte values between file byte order and host byte order.
///
/// Every multi-byte field read from or written to a WAV stream must pass
/// through the normalizer exactly once per direction.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    host: Endianness,
}

impl Normalizer {
    /// Create a normalizer for an explicit host byte order.
    pub fn new(host: Endianness) -> Self {
        Normalizer { host }
    }

    /// Create a normalizer for the running process.
    pub fn host() -> Self {
        Normalizer::new(Endianness::host())
    }

    /// Normalize a 16-bit unsigned value.
    pub fn u16(&self, x: u16) -> u16 {
        match self.host {
            Endianness::Little => x,
            Endianness::Big => x.swap_bytes(),
        }
    }

    /// Normalize a 16-bit signed value.
    pub fn i16(&self, x: i16) -> i16 {
        match self.host {
            Endianness::Little => x,
            Endianness::Big => x.swap_bytes(),
        }
    }

    /// Normalize a 32-bit unsigned value.
    pub fn u32(&self, x: u32) -> u32 {
        match self.host {
            Endianness::Little => x,
            Endianness::Big => x.swap_bytes(),
        }
    }
}
