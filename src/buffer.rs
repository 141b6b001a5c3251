//! Audio buffer and channel layout definitions

/// Speaker layout selected by the declared channel-count field of a WAV file.
///
/// Slot order in the interleaved stream:
///
/// - `Stereo`: left, right
/// - `ThreeChannel`: left, right, center
/// - `Quad`: front left, front right, rear left, rear right
/// - `FourChannel`: left, center, right, surround
/// - `SixChannel`: left center, left, center, right center, right, surround
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
    ThreeChannel,
    Quad,
    FourChannel,
    SixChannel,
}

impl ChannelLayout {
    /// Layout for a declared channel-count field value (1..=6).
    pub fn from_count(count: u16) -> Option<Self> {
        match count {
            1 => Some(ChannelLayout::Mono),
            2 => Some(ChannelLayout::Stereo),
            3 => Some(ChannelLayout::ThreeChannel),
            4 => Some(ChannelLayout::Quad),
            5 => Some(ChannelLayout::FourChannel),
            6 => Some(ChannelLayout::SixChannel),
            _ => None,
        }
    }

    /// Declared channel-count field value for this layout.
    pub fn count(&self) -> u16 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::ThreeChannel => 3,
            ChannelLayout::Quad => 4,
            ChannelLayout::FourChannel => 5,
            ChannelLayout::SixChannel => 6,
        }
    }

    /// Number of interleaved channel slots present in the byte stream.
    ///
    /// `Quad` and `FourChannel` both occupy four slots; they differ in
    /// speaker order, not stream width.
    pub fn slot_count(&self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::ThreeChannel => 3,
            ChannelLayout::Quad => 4,
            ChannelLayout::FourChannel => 4,
            ChannelLayout::SixChannel => 6,
        }
    }
}

/// Decoded PCM audio: per-slot sample sequences plus format metadata.
///
/// `channels` holds one sequence per physical slot, indexed 0-based in slot
/// order. All populated sequences must hold the same number of frames; the
/// encoder checks this before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    /// Declared channel count (1..=6), selects the [`ChannelLayout`]
    pub channel_count: u16,
    /// Bytes per single-channel sample (only 2 is supported by the codec)
    pub bytes_per_sample: u16,
    /// Samples per second
    pub sample_rate: u32,
    /// Per-slot sample sequences
    pub channels: Vec<Vec<i16>>,
}

impl AudioBuffer {
    /// Create an empty buffer with the given format.
    ///
    /// One empty sequence is allocated per channel slot. An out-of-range
    /// channel count yields no slots; decode and encode reject it.
    pub fn with_format(channel_count: u16, bytes_per_sample: u16, sample_rate: u32) -> Self {
        let slots = ChannelLayout::from_count(channel_count).map_or(0, |l| l.slot_count());
        AudioBuffer {
            channel_count,
            bytes_per_sample,
            sample_rate,
            channels: vec![Vec::new(); slots],
        }
    }

    /// Layout declared by `channel_count`, if in range.
    pub fn layout(&self) -> Option<ChannelLayout> {
        ChannelLayout::from_count(self.channel_count)
    }

    /// Number of populated channel slots.
    pub fn slot_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames, taken from slot 0.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }
}

impl Default for AudioBuffer {
    /// Mono, 16-bit, 44100 Hz.
    fn default() -> Self {
        AudioBuffer::with_format(1, 2, 44100)
    }
}
