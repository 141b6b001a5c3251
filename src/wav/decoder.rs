//! WAV file decoding: header parse plus channel de-interleaving

use super::header::WavHeader;
use crate::buffer::{AudioBuffer, ChannelLayout};
use crate::error::{Error, Result};
use crate::util::Normalizer;
use byteorder::{NativeEndian, ReadBytesExt};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Decodes PCM WAV streams into [`AudioBuffer`]s
pub struct WavDecoder {
    endian: Normalizer,
}

impl WavDecoder {
    /// Create a decoder for the host byte order.
    pub fn new() -> Self {
        WavDecoder {
            endian: Normalizer::host(),
        }
    }

    /// Decode a complete WAV stream into a fresh buffer.
    ///
    /// The payload length is taken from the header's data chunk size, and is
    /// consumed in whole frames of `slots * bytes_per_sample` bytes. The
    /// stream must be positioned at the start of the file.
    pub fn decode<R: Read>(&self, reader: &mut R) -> Result<AudioBuffer> {
        let header = WavHeader::read(reader, &self.endian)?;

        let layout = ChannelLayout::from_count(header.format.channels)
            .ok_or(Error::InvalidChannelCount(header.format.channels))?;

        if header.format.bits_per_sample != 16 {
            return Err(Error::UnsupportedSampleWidth {
                bits: header.format.bits_per_sample,
            });
        }

        let bytes_per_sample = header.format.bits_per_sample / 8;
        let slots = layout.slot_count();
        let frame_size = slots * bytes_per_sample as usize;
        let payload_len = header.data_size as usize;

        debug!(
            channels = header.format.channels,
            sample_rate = header.format.sample_rate,
            payload_len,
            "decoding wav stream"
        );

        let mut buffer = AudioBuffer::with_format(
            header.format.channels,
            bytes_per_sample,
            header.format.sample_rate,
        );
        for channel in &mut buffer.channels {
            channel.reserve(payload_len / frame_size);
        }

        // A trailing partial frame is an error, not a short read.
        let mut consumed = 0;
        let mut frame = 0usize;
        while consumed < payload_len {
            for slot in 0..slots {
                let word = reader.read_i16::<NativeEndian>().map_err(|e| {
                    if e.kind() == ErrorKind::UnexpectedEof {
                        Error::TruncatedData { frame }
                    } else {
                        Error::Io(e)
                    }
                })?;
                buffer.channels[slot].push(self.endian.i16(word));
            }
            consumed += frame_size;
            frame += 1;
        }

        Ok(buffer)
    }

    /// Open `path` for binary reads and decode it.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<AudioBuffer> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::cannot_open(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        self.decode(&mut reader)
    }
}

impl Default for WavDecoder {
    fn default() -> Self {
        Self::new()
    }
}
