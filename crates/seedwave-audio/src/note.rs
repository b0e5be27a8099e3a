//! Note events, tracks, and pitch conversion.

use serde::{Deserialize, Serialize};

/// Reference pitch number for A4.
pub const A4_PITCH: i32 = 69;

/// Frequency of A4 in Hz.
pub const A4_FREQ: f64 = 440.0;

/// Convert a MIDI-style pitch number to frequency in Hz.
///
/// Uses the equal-tempered formula: f = 440 * 2^((n-69)/12).
///
/// # Examples
/// ```
/// use seedwave_audio::note::pitch_to_freq;
///
/// assert!((pitch_to_freq(69) - 440.0).abs() < 1e-9);
/// assert!((pitch_to_freq(81) - 880.0).abs() < 1e-9);
/// ```
pub fn pitch_to_freq(pitch: i32) -> f64 {
    A4_FREQ * 2.0_f64.powf((pitch - A4_PITCH) as f64 / 12.0)
}

/// Which renderer a note is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    /// Sine oscillator shaped by an ADSR envelope.
    Sine,
    /// Noise burst with exponential decay.
    Noise,
}

/// A single scheduled note. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Renderer for this note.
    pub voice: Voice,
    /// Semitone pitch number (69 = A4). Ignored by the noise renderer.
    pub pitch: i32,
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Peak amplitude in (0, 1].
    pub amplitude: f64,
}

impl NoteEvent {
    /// Creates a tonal note.
    pub fn tone(pitch: i32, start: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            voice: Voice::Sine,
            pitch,
            start,
            duration,
            amplitude,
        }
    }

    /// Creates a noise burst.
    pub fn noise(start: f64, duration: f64, amplitude: f64) -> Self {
        Self {
            voice: Voice::Noise,
            pitch: 0,
            start,
            duration,
            amplitude,
        }
    }

    /// Fundamental frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        pitch_to_freq(self.pitch)
    }

    /// End time in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// An ordered sequence of note events for one instrument.
///
/// Events may overlap; the mixer sums them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track name used in logs and summaries.
    pub name: String,
    /// Events in start-time order.
    pub events: Vec<NoteEvent>,
}

impl Track {
    /// Creates an empty named track.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: NoteEvent) {
        self.events.push(event);
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the track has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Latest end time of any event, or 0 for an empty track.
    pub fn span(&self) -> f64 {
        self.events.iter().map(NoteEvent::end).fold(0.0, f64::max)
    }
}
