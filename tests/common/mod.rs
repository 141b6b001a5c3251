//! Common WAV byte-building helpers for integration tests
//!
//! The builders here assemble WAV files by hand, independent of the
//! library's encoder, so that codec tests have a reference to compare
//! against.

#![allow(dead_code)]

/// Build a complete 16-bit PCM WAV file for the given channel sequences.
///
/// `channel_count` is the declared header field; `channels` holds one
/// sequence per interleaved slot (which may be fewer than `channel_count`,
/// e.g. 4 slots for a declared count of 5). All sequences must be the same
/// length.
pub fn build_wav(channel_count: u16, sample_rate: u32, channels: &[Vec<i16>]) -> Vec<u8> {
    let slots = channels.len();
    let frames = channels.first().map_or(0, Vec::len);
    let bytes_per_sample = 2u16;

    let data_size = (frames * slots) as u32 * u32::from(bytes_per_sample);
    let block_align = slots as u16 * bytes_per_sample;
    let byte_rate = sample_rate * u32::from(block_align);

    let mut wav = Vec::with_capacity(44 + data_size as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(data_size + 36).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channel_count.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());

    for frame in 0..frames {
        for channel in channels {
            wav.extend_from_slice(&channel[frame].to_le_bytes());
        }
    }

    wav
}

/// One distinct ramp per slot, so interleaving mistakes are visible.
pub fn ramp_channels(slots: usize, frames: usize) -> Vec<Vec<i16>> {
    (0..slots)
        .map(|slot| {
            (0..frames)
                .map(|frame| (slot as i16 + 1) * 1000 + frame as i16)
                .collect()
        })
        .collect()
}
