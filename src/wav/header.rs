//! WAV file header structures and the fixed 44-byte codec

use super::{DATA_MAGIC, FMT_MAGIC, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::Normalizer;
use std::io::{ErrorKind, Read, Write};

/// Format tag value for uncompressed PCM
pub const PCM_FORMAT_TAG: u16 = 1;

/// Size of the fmt chunk payload for plain PCM
pub const FMT_CHUNK_SIZE: u32 = 16;

/// WAV format chunk data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (1 = PCM)
    pub audio_format: u16,
    /// Declared channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Bytes per interleaved frame
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

/// The fixed RIFF/fmt/data header prefix of a PCM WAV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (payload length + 36)
    pub riff_size: u32,
    /// Format chunk fields
    pub format: WavFormat,
    /// Data chunk size: payload byte length
    pub data_size: u32,
}

impl WavHeader {
    /// Fixed byte length of the header.
    pub const SIZE: usize = 44;

    /// Read and validate exactly [`Self::SIZE`] bytes from `reader`.
    ///
    /// The RIFF and `fmt ` magics are validated. The WAVE form type and the
    /// data chunk id are not: some producers omit or rename the data id.
    pub fn read<R: Read>(reader: &mut R, endian: &Normalizer) -> Result<Self> {
        let mut raw = [0u8; Self::SIZE];
        reader.read_exact(&mut raw).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => Error::TruncatedHeader,
            _ => Error::Io(e),
        })?;

        if &raw[0..4] != RIFF_MAGIC {
            return Err(Error::malformed("missing RIFF chunk magic"));
        }
        if &raw[12..16] != FMT_MAGIC {
            return Err(Error::malformed("missing fmt chunk magic"));
        }

        Ok(WavHeader {
            riff_size: endian.u32(read_u32_at(&raw, 4)),
            format: WavFormat {
                audio_format: endian.u16(read_u16_at(&raw, 20)),
                channels: endian.u16(read_u16_at(&raw, 22)),
                sample_rate: endian.u32(read_u32_at(&raw, 24)),
                byte_rate: endian.u32(read_u32_at(&raw, 28)),
                block_align: endian.u16(read_u16_at(&raw, 32)),
                bits_per_sample: endian.u16(read_u16_at(&raw, 34)),
            },
            data_size: endian.u32(read_u32_at(&raw, 40)),
        })
    }

    /// Write the [`Self::SIZE`] header bytes to `writer`.
    pub fn write<W: Write>(&self, writer: &mut W, endian: &Normalizer) -> Result<()> {
        let mut raw = [0u8; Self::SIZE];

        raw[0..4].copy_from_slice(RIFF_MAGIC);
        write_u32_at(&mut raw, 4, endian.u32(self.riff_size));
        raw[8..12].copy_from_slice(WAVE_MAGIC);

        raw[12..16].copy_from_slice(FMT_MAGIC);
        write_u32_at(&mut raw, 16, endian.u32(FMT_CHUNK_SIZE));
        write_u16_at(&mut raw, 20, endian.u16(self.format.audio_format));
        write_u16_at(&mut raw, 22, endian.u16(self.format.channels));
        write_u32_at(&mut raw, 24, endian.u32(self.format.sample_rate));
        write_u32_at(&mut raw, 28, endian.u32(self.format.byte_rate));
        write_u16_at(&mut raw, 32, endian.u16(self.format.block_align));
        write_u16_at(&mut raw, 34, endian.u16(self.format.bits_per_sample));

        raw[36..40].copy_from_slice(DATA_MAGIC);
        write_u32_at(&mut raw, 40, endian.u32(self.data_size));

        writer.write_all(&raw)?;
        Ok(())
    }
}

// Raw loads and stores in native order; callers normalize each value once.

fn read_u16_at(raw: &[u8], offset: usize) -> u16 {
    u16::from_ne_bytes([raw[offset], raw[offset + 1]])
}

fn read_u32_at(raw: &[u8], offset: usize) -> u32 {
    u32::from_ne_bytes([
        raw[offset],
        raw[offset + 1],
        raw[offset + 2],
        raw[offset + 3],
    ])
}

fn write_u16_at(raw: &mut [u8], offset: usize, value: u16) {
    raw[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
}

fn write_u32_at(raw: &mut [u8], offset: usize, value: u32) {
    raw[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
}
