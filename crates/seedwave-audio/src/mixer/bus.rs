//! Per-track master buffer.

use tracing::trace;

use crate::buffer::silence;
use crate::error::AudioResult;
use crate::note::Track;
use crate::rng::SeedSource;
use crate::synthesis::render_event;

/// A silent buffer spanning the whole clip that events are added into.
#[derive(Debug, Clone)]
pub struct TrackBus {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl TrackBus {
    /// Allocates a silent bus of `num_samples` samples.
    pub fn new(num_samples: usize, sample_rate: f64) -> AudioResult<Self> {
        Ok(Self {
            samples: silence(num_samples)?,
            sample_rate,
        })
    }

    /// Renders every event of `track` onto a fresh bus.
    pub fn render(
        track: &Track,
        num_samples: usize,
        sample_rate: f64,
        source: &mut SeedSource,
    ) -> AudioResult<Self> {
        let mut bus = Self::new(num_samples, sample_rate)?;
        for event in &track.events {
            let rendered = render_event(event, sample_rate, source)?;
            bus.place(&rendered, bus.offset_of(event.start));
        }
        trace!(track = %track.name, events = track.len(), "rendered track bus");
        Ok(bus)
    }

    /// Sample offset for a start time in seconds, rounded to nearest.
    pub fn offset_of(&self, start: f64) -> usize {
        let offset = (start * self.sample_rate).round();
        if offset.is_finite() && offset > 0.0 {
            offset as usize
        } else {
            0
        }
    }

    /// Adds `samples` starting at `offset`, dropping anything past the end.
    pub fn place(&mut self, samples: &[f64], offset: usize) {
        let Some(dest) = self.samples.get_mut(offset..) else {
            return;
        };
        for (out, &sample) in dest.iter_mut().zip(samples) {
            *out += sample;
        }
    }

    /// Read access to the bus.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples in the bus.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the bus holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the bus, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
