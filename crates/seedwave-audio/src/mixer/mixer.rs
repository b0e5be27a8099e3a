//! Summing mixer for track buses.

use crate::buffer::silence;
use crate::error::AudioResult;

use super::bus::TrackBus;

/// Sums any number of track buses into one mono buffer.
///
/// Summation is plain floating addition; the result may leave `[-1, 1]`
/// and is limited later by the gain stage.
#[derive(Debug)]
pub struct Mixer {
    /// Output sample length.
    num_samples: usize,
    /// Accumulated buses.
    buses: Vec<TrackBus>,
}

impl Mixer {
    /// Creates a new mixer.
    pub fn new(num_samples: usize) -> Self {
        Self {
            num_samples,
            buses: Vec::new(),
        }
    }

    /// Adds a bus to the mix.
    pub fn add_bus(&mut self, bus: TrackBus) {
        self.buses.push(bus);
    }

    /// Number of buses added so far.
    pub fn num_buses(&self) -> usize {
        self.buses.len()
    }

    /// Returns the number of output samples.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Mixes all buses to mono output.
    pub fn mix_mono(self) -> AudioResult<Vec<f64>> {
        let mut output = silence(self.num_samples)?;

        for bus in &self.buses {
            for (out, &sample) in output.iter_mut().zip(bus.samples()) {
                *out += sample;
            }
        }

        Ok(output)
    }
}
