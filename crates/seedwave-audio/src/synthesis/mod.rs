//! Per-event sample synthesis.
//!
//! - `tone` - Sine oscillator shaped by an ADSR envelope (melody, bass)
//! - `noise` - White noise burst with exponential decay (hi-hat)
//!
//! [`render_event`] dispatches on the event's [`Voice`] tag.

pub mod noise;
pub mod tone;

pub use noise::NoiseSynth;
pub use tone::ToneSynth;

use crate::error::AudioResult;
use crate::note::{NoteEvent, Voice};
use crate::rng::SeedSource;

/// Common trait for the renderers.
pub trait Synthesizer {
    /// Generates `num_samples` samples.
    ///
    /// Any randomness must come from `source`.
    fn synthesize(
        &self,
        num_samples: usize,
        sample_rate: f64,
        source: &mut SeedSource,
    ) -> AudioResult<Vec<f64>>;
}

/// Number of samples an event of `duration` seconds occupies.
///
/// Truncates toward zero; negative or non-finite durations render nothing.
pub fn event_samples(duration: f64, sample_rate: f64) -> usize {
    let samples = duration * sample_rate;
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}

/// Renders one note event into a standalone buffer.
///
/// # Arguments
/// * `event` - Note to render
/// * `sample_rate` - Sample rate in Hz
/// * `source` - Clip randomness; only noise voices draw from it
///
/// # Returns
/// `floor(duration * sample_rate)` samples starting at the note onset
pub fn render_event(
    event: &NoteEvent,
    sample_rate: f64,
    source: &mut SeedSource,
) -> AudioResult<Vec<f64>> {
    let num_samples = event_samples(event.duration, sample_rate);
    match event.voice {
        Voice::Sine => ToneSynth::new(event.frequency(), event.amplitude).synthesize(
            num_samples,
            sample_rate,
            source,
        ),
        Voice::Noise => NoiseSynth::new(event.amplitude).synthesize(num_samples, sample_rate, source),
    }
}
