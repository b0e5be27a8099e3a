//! Feedback delay line used as a reverb tap.

use crate::buffer::silence;
use crate::error::{AudioError, AudioResult};

/// A ring buffer with a single cursor and a feedback coefficient.
///
/// Each step reads the cell under the cursor, stores
/// `input + delayed * feedback` into that same cell, and advances.
#[derive(Debug, Clone)]
pub struct FeedbackDelay {
    buffer: Vec<f64>,
    position: usize,
    feedback: f64,
}

impl FeedbackDelay {
    /// Creates a delay of `length` samples (at least one).
    pub fn new(length: usize, feedback: f64) -> AudioResult<Self> {
        Ok(Self {
            buffer: silence(length.max(1))?,
            position: 0,
            feedback,
        })
    }

    /// Creates a delay sized from a time in seconds, rounded to the nearest sample.
    pub fn from_seconds(seconds: f64, sample_rate: f64, feedback: f64) -> AudioResult<Self> {
        let length = (seconds * sample_rate).round();
        if !length.is_finite() || length < 0.0 {
            return Err(AudioError::invalid_param(
                "delay",
                format!("{} s at {} Hz is not a usable delay", seconds, sample_rate),
            ));
        }
        Self::new(length as usize, feedback)
    }

    /// Delay length in samples.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; a delay holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feeds one input sample and returns the delayed output.
    pub fn process(&mut self, input: f64) -> f64 {
        let delayed = self.buffer[self.position];
        self.buffer[self.position] = input + delayed * self.feedback;

        self.position += 1;
        if self.position >= self.buffer.len() {
            self.position = 0;
        }

        delayed
    }

    /// Clears the buffer and rewinds the cursor.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_echoes_with_feedback() {
        let mut dl = FeedbackDelay::new(3, 0.5).unwrap();
        let out: Vec<f64> = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
            .iter()
            .map(|&x| dl.process(x))
            .collect();

        assert_eq!(out, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.25]);
    }

    #[test]
    fn test_from_seconds_rounds() {
        assert_eq!(FeedbackDelay::from_seconds(0.029, 44100.0, 0.5).unwrap().len(), 1279);
        assert_eq!(FeedbackDelay::from_seconds(0.037, 44100.0, 0.5).unwrap().len(), 1632);
        assert_eq!(FeedbackDelay::from_seconds(0.041, 44100.0, 0.5).unwrap().len(), 1808);
        assert_eq!(FeedbackDelay::from_seconds(0.043, 44100.0, 0.5).unwrap().len(), 1896);
    }

    #[test]
    fn test_from_seconds_rejects_bad_delay() {
        let err = FeedbackDelay::from_seconds(-0.01, 44100.0, 0.5).unwrap_err();
        assert_eq!(err.code(), "AUDIO_002");
        assert!(FeedbackDelay::from_seconds(0.029, f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_zero_length_becomes_one() {
        let mut dl = FeedbackDelay::new(0, 0.5).unwrap();
        assert_eq!(dl.len(), 1);
        assert_eq!(dl.process(1.0), 0.0);
        assert_eq!(dl.process(0.0), 1.0);
    }

    #[test]
    fn test_clear() {
        let mut dl = FeedbackDelay::new(2, 0.5).unwrap();
        dl.process(1.0);
        dl.clear();
        assert_eq!(dl.process(0.0), 0.0);
        assert_eq!(dl.process(0.0), 0.0);
    }
}
