//! WAV file encoding: channel re-interleaving plus header emission

use super::header::{WavFormat, WavHeader, PCM_FORMAT_TAG};
use crate::buffer::AudioBuffer;
use crate::error::{Error, Result};
use crate::util::Normalizer;
use byteorder::{NativeEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Encodes [`AudioBuffer`]s as PCM WAV streams
pub struct WavEncoder {
    endian: Normalizer,
}

impl WavEncoder {
    /// Create an encoder for the host byte order.
    pub fn new() -> Self {
        WavEncoder {
            endian: Normalizer::host(),
        }
    }

    /// Encode `buffer` as a complete WAV stream.
    ///
    /// The buffer must carry 16-bit samples and one sequence per channel
    /// slot, all of equal length. The frame count is the length of slot 0.
    pub fn encode<W: Write>(&self, buffer: &AudioBuffer, writer: &mut W) -> Result<()> {
        let layout = buffer
            .layout()
            .ok_or(Error::InvalidChannelCount(buffer.channel_count))?;

        if buffer.bytes_per_sample != 2 {
            return Err(Error::UnsupportedSampleWidth {
                bits: buffer.bytes_per_sample * 8,
            });
        }

        let slots = layout.slot_count();
        let frames = buffer.frame_count();
        for slot in 0..slots {
            let actual = buffer.channels.get(slot).map_or(0, Vec::len);
            if actual != frames {
                return Err(Error::ChannelLengthMismatch {
                    channel: slot,
                    expected: frames,
                    actual,
                });
            }
        }

        let bytes_per_sample = u32::from(buffer.bytes_per_sample);
        let data_size = (frames * slots) as u32 * bytes_per_sample;
        let block_align = slots as u16 * buffer.bytes_per_sample;

        debug!(
            channels = buffer.channel_count,
            sample_rate = buffer.sample_rate,
            frames,
            "encoding wav stream"
        );

        let header = WavHeader {
            riff_size: data_size + (WavHeader::SIZE as u32 - 8),
            format: WavFormat {
                audio_format: PCM_FORMAT_TAG,
                channels: buffer.channel_count,
                sample_rate: buffer.sample_rate,
                byte_rate: buffer.sample_rate * slots as u32 * bytes_per_sample,
                block_align,
                bits_per_sample: buffer.bytes_per_sample * 8,
            },
            data_size,
        };
        header.write(writer, &self.endian)?;

        for frame in 0..frames {
            for slot in 0..slots {
                writer.write_i16::<NativeEndian>(self.endian.i16(buffer.channels[slot][frame]))?;
            }
        }

        Ok(())
    }

    /// Create `path` and encode into it.
    ///
    /// `File::create` transfers bytes verbatim on every platform, so the
    /// destination is binary-safe without further flags.
    pub fn encode_file<P: AsRef<Path>>(&self, buffer: &AudioBuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::cannot_open(format!("{}: {}", path.display(), e)))?;
        let mut writer = BufWriter::new(file);
        self.encode(buffer, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for WavEncoder {
    fn default() -> Self {
        Self::new()
    }
}
