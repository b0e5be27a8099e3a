//! Sine tone with ADSR envelope.

use std::f64::consts::TAU;

use crate::buffer::silence;
use crate::envelope::EnvelopeShape;
use crate::error::AudioResult;
use crate::rng::SeedSource;

use super::Synthesizer;

/// Enveloped sine oscillator.
#[derive(Debug, Clone, Copy)]
pub struct ToneSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl ToneSynth {
    /// Creates a tone renderer.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for ToneSynth {
    fn synthesize(
        &self,
        num_samples: usize,
        sample_rate: f64,
        _source: &mut SeedSource,
    ) -> AudioResult<Vec<f64>> {
        let envelope = EnvelopeShape::for_note(num_samples);
        let mut output = silence(num_samples)?;

        // Phase is computed from the sample index, not accumulated, so long
        // notes do not drift.
        let step = TAU * self.frequency / sample_rate;
        for (i, sample) in output.iter_mut().enumerate() {
            *sample = (step * i as f64).sin() * envelope.level(i) * self.amplitude;
        }

        Ok(output)
    }
}
