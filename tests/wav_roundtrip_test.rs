//! WAV round-trip integration tests
//!
//! Each test encodes an AudioBuffer to bytes, decodes those bytes back, and
//! verifies the result matches the input: format metadata and every
//! per-channel sample sequence alike.

use std::io::Cursor;
use wavio_lib::{AudioBuffer, ChannelLayout, WavDecoder, WavEncoder};

#[path = "common/mod.rs"]
mod common;

fn roundtrip(buffer: &AudioBuffer) -> AudioBuffer {
    let mut bytes = Vec::new();
    WavEncoder::new()
        .encode(buffer, &mut bytes)
        .expect("encode should succeed");
    WavDecoder::new()
        .decode(&mut Cursor::new(bytes))
        .expect("decode should succeed")
}

fn filled_buffer(channel_count: u16, frames: usize) -> AudioBuffer {
    let mut buffer = AudioBuffer::with_format(channel_count, 2, 44100);
    buffer.channels = common::ramp_channels(buffer.slot_count(), frames);
    buffer
}

#[test]
fn test_roundtrip_all_channel_counts() {
    for channel_count in 1..=6 {
        let buffer = filled_buffer(channel_count, 32);
        let decoded = roundtrip(&buffer);
        assert_eq!(decoded, buffer, "channel count {}", channel_count);
    }
}

#[test]
fn test_roundtrip_preserves_format_metadata() {
    for sample_rate in [8000, 22050, 44100, 96000] {
        let mut buffer = AudioBuffer::with_format(2, 2, sample_rate);
        buffer.channels = common::ramp_channels(2, 7);

        let decoded = roundtrip(&buffer);
        assert_eq!(decoded.channel_count, 2);
        assert_eq!(decoded.bytes_per_sample, 2);
        assert_eq!(decoded.sample_rate, sample_rate);
    }
}

#[test]
fn test_roundtrip_extreme_sample_values() {
    let mut buffer = AudioBuffer::with_format(1, 2, 44100);
    buffer.channels[0] = vec![i16::MIN, -1, 0, 1, i16::MAX];

    let decoded = roundtrip(&buffer);
    assert_eq!(decoded.channels[0], vec![i16::MIN, -1, 0, 1, i16::MAX]);
}

#[test]
fn test_encoded_bytes_match_reference() {
    // The encoder output must be byte-identical to a hand-assembled file.
    let channels = common::ramp_channels(2, 16);
    let reference = common::build_wav(2, 48000, &channels);

    let mut buffer = AudioBuffer::with_format(2, 2, 48000);
    buffer.channels = channels;

    let mut encoded = Vec::new();
    WavEncoder::new().encode(&buffer, &mut encoded).unwrap();
    assert_eq!(encoded, reference);
}

#[test]
fn test_declared_counts_four_and_five_share_slot_width() {
    // Quad and the alternate 4-channel layout differ in speaker order only;
    // both carry four interleaved slots.
    for channel_count in [4u16, 5] {
        let channels = common::ramp_channels(4, 8);
        let bytes = common::build_wav(channel_count, 44100, &channels);

        let decoded = WavDecoder::new().decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.channel_count, channel_count);
        assert_eq!(decoded.slot_count(), 4);
        assert_eq!(decoded.channels, channels);
    }
    assert_eq!(
        ChannelLayout::from_count(4).unwrap().slot_count(),
        ChannelLayout::from_count(5).unwrap().slot_count()
    );
}

#[test]
fn test_concrete_stereo_scenario() {
    let mut buffer = AudioBuffer::with_format(2, 2, 44100);
    buffer.channels[0] = vec![100, 200, 300, 400];
    buffer.channels[1] = vec![-50, -60, -70, -80];

    let decoded = roundtrip(&buffer);
    assert_eq!(decoded.channels[0], vec![100, 200, 300, 400]);
    assert_eq!(decoded.channels[1], vec![-50, -60, -70, -80]);

    // Midpoint of the first two left samples: -50 cos(pi/2) + 150 = 150
    assert_eq!(decoded.sample_at(0, 0.5), 150);
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.wav");

    let buffer = filled_buffer(3, 100);
    WavEncoder::new().encode_file(&buffer, &path).unwrap();

    let decoded = WavDecoder::new().decode_file(&path).unwrap();
    assert_eq!(decoded, buffer);
}

#[test]
fn test_zero_frame_roundtrip() {
    let buffer = AudioBuffer::with_format(2, 2, 44100);
    let decoded = roundtrip(&buffer);
    assert_eq!(decoded.frame_count(), 0);
    assert_eq!(decoded.slot_count(), 2);
}
