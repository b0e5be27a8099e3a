//! Fixed-topology reverb built from parallel feedback delay taps.
//!
//! Every tap sees the dry signal. The wet signal is the sum of the tap
//! outputs scaled by [`WET_LEVEL`], added on top of the dry signal.

use tracing::trace;

use crate::error::AudioResult;

use super::delay_line::FeedbackDelay;

/// Tap delay times in seconds.
pub const TAP_TIMES: [f64; 4] = [0.029, 0.037, 0.041, 0.043];

/// Feedback coefficient of every tap.
pub const TAP_FEEDBACK: f64 = 0.5;

/// Gain applied to each tap output.
pub const WET_LEVEL: f64 = 0.20;

/// Four parallel feedback delays summed with the dry signal.
#[derive(Debug, Clone)]
pub struct ReverbUnit {
    taps: Vec<FeedbackDelay>,
    wet_level: f64,
}

impl ReverbUnit {
    /// Creates the reverb with fresh (silent) taps.
    pub fn new(sample_rate: f64) -> AudioResult<Self> {
        let taps = TAP_TIMES
            .iter()
            .map(|&t| FeedbackDelay::from_seconds(t, sample_rate, TAP_FEEDBACK))
            .collect::<AudioResult<Vec<_>>>()?;

        Ok(Self {
            taps,
            wet_level: WET_LEVEL,
        })
    }

    /// Tap lengths in samples.
    pub fn tap_lengths(&self) -> Vec<usize> {
        self.taps.iter().map(FeedbackDelay::len).collect()
    }

    /// Processes one dry sample, returning dry + wet.
    pub fn process_sample(&mut self, dry: f64) -> f64 {
        let wet_level = self.wet_level;
        let wet: f64 = self
            .taps
            .iter_mut()
            .map(|tap| tap.process(dry) * wet_level)
            .sum();
        dry + wet
    }

    /// Processes a buffer in place.
    pub fn process(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process_sample(*sample);
        }
        trace!(samples = samples.len(), "applied reverb");
    }

    /// Silences every tap.
    pub fn clear(&mut self) {
        for tap in &mut self.taps {
            tap.clear();
        }
    }
}
