//! Amplitude envelopes measured in samples.
//!
//! [`EnvelopeShape`] is an Attack-Decay-Sustain-Release curve laid over a
//! fixed number of samples. [`exponential_decay`] is the one-stage curve used
//! for percussive noise.

/// Sustain level used for tonal notes.
pub const NOTE_SUSTAIN_LEVEL: f64 = 0.7;

/// Upper bound on the attack stage of a tonal note, in samples.
pub const NOTE_MAX_ATTACK: usize = 1000;

/// Upper bound on the decay stage of a tonal note, in samples.
pub const NOTE_MAX_DECAY: usize = 2000;

/// Upper bound on the release stage of a tonal note, in samples.
pub const NOTE_MAX_RELEASE: usize = 3000;

/// Decay rate of the percussive curve over its full length.
pub const PERCUSSIVE_DECAY_RATE: f64 = 5.0;

/// ADSR envelope over a fixed sample count.
///
/// Invariant: `attack + decay + release <= total`. The remainder is the
/// sustain stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeShape {
    attack: usize,
    decay: usize,
    sustain_level: f64,
    release: usize,
    total: usize,
}

impl EnvelopeShape {
    /// Builds a shape, falling back when the stages do not fit.
    ///
    /// If `attack + decay + release` exceeds `total`, the shape becomes
    /// attack = total / 3, decay = 0, release = total - attack, and no
    /// sustain time.
    ///
    /// # Arguments
    /// * `total` - Note length in samples
    /// * `attack` - Attack length in samples
    /// * `decay` - Decay length in samples
    /// * `sustain_level` - Sustain level, clamped to `[0, 1]`
    /// * `release` - Release length in samples
    ///
    /// # Returns
    /// The shape, or the fallback shape when the stages overflow `total`
    pub fn new(
        total: usize,
        attack: usize,
        decay: usize,
        sustain_level: f64,
        release: usize,
    ) -> Self {
        let sustain_level = sustain_level.clamp(0.0, 1.0);
        let fits = attack
            .checked_add(decay)
            .and_then(|ad| ad.checked_add(release))
            .is_some_and(|sum| sum <= total);

        if fits {
            Self {
                attack,
                decay,
                sustain_level,
                release,
                total,
            }
        } else {
            let attack = total / 3;
            Self {
                attack,
                decay: 0,
                sustain_level,
                release: total - attack,
                total,
            }
        }
    }

    /// The envelope used for melody and bass notes of `total` samples.
    ///
    /// # Arguments
    /// * `total` - Note length in samples
    ///
    /// # Returns
    /// Stages of `total/20`, `total/10`, and `total/8` samples, capped at
    /// 1000, 2000, and 3000, with a sustain level of 0.7
    pub fn for_note(total: usize) -> Self {
        Self::new(
            total,
            (total / 20).min(NOTE_MAX_ATTACK),
            (total / 10).min(NOTE_MAX_DECAY),
            NOTE_SUSTAIN_LEVEL,
            (total / 8).min(NOTE_MAX_RELEASE),
        )
    }

    /// Attack length in samples.
    pub fn attack(&self) -> usize {
        self.attack
    }

    /// Decay length in samples.
    pub fn decay(&self) -> usize {
        self.decay
    }

    /// Sustain level.
    pub fn sustain_level(&self) -> f64 {
        self.sustain_level
    }

    /// Sustain length in samples.
    pub fn sustain(&self) -> usize {
        self.total - self.attack - self.decay - self.release
    }

    /// Release length in samples.
    pub fn release(&self) -> usize {
        self.release
    }

    /// Total length in samples.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Envelope level at sample `i`. Zero at and past `total`.
    ///
    /// # Arguments
    /// * `i` - Sample index from the start of the note
    ///
    /// # Returns
    /// Amplitude multiplier in `[0, 1]`
    pub fn level(&self, i: usize) -> f64 {
        if i >= self.total {
            return 0.0;
        }

        let decay_start = self.attack;
        let sustain_start = decay_start + self.decay;
        let release_start = sustain_start + self.sustain();

        if i < decay_start {
            i as f64 / self.attack as f64
        } else if i < sustain_start {
            let progress = (i - decay_start) as f64 / self.decay as f64;
            1.0 - (1.0 - self.sustain_level) * progress
        } else if i < release_start {
            self.sustain_level
        } else {
            // Progress reaches 1.0 on the last sample so the note ends silent.
            let progress = (i - release_start + 1) as f64 / self.release as f64;
            self.sustain_level * (1.0 - progress)
        }
    }

    /// Renders the whole curve.
    pub fn render(&self) -> Vec<f64> {
        (0..self.total).map(|i| self.level(i)).collect()
    }
}

/// Exponential decay curve `exp(-rate * i / total)`.
///
/// # Arguments
/// * `i` - Sample index from the start of the burst
/// * `total` - Burst length in samples
///
/// # Returns
/// Amplitude multiplier, 1.0 at `i = 0`, or 0.0 for an empty burst
pub fn exponential_decay(i: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (-PERCUSSIVE_DECAY_RATE * i as f64 / total as f64).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_shape_stage_lengths() {
        let env = EnvelopeShape::for_note(44_100);
        assert_eq!(env.attack(), 1000);
        assert_eq!(env.decay(), 2000);
        assert_eq!(env.release(), 3000);
        assert_eq!(env.sustain(), 44_100 - 6000);
        assert_eq!(env.sustain_level(), 0.7);
    }

    #[test]
    fn test_short_note_scales_stages() {
        let env = EnvelopeShape::for_note(4000);
        assert_eq!(env.attack(), 200);
        assert_eq!(env.decay(), 400);
        assert_eq!(env.release(), 500);
        assert_eq!(env.sustain(), 2900);
    }

    #[test]
    fn test_attack_decay_sustain_levels() {
        let env = EnvelopeShape::new(100, 10, 10, 0.5, 20);
        assert_eq!(env.level(0), 0.0);
        assert!((env.level(5) - 0.5).abs() < 1e-12);
        assert!((env.level(10) - 1.0).abs() < 1e-12);
        assert!((env.level(15) - 0.75).abs() < 1e-12);
        assert!((env.level(50) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_release_ends_at_zero() {
        let env = EnvelopeShape::for_note(10_000);
        let curve = env.render();
        assert_eq!(curve.len(), 10_000);
        assert_eq!(*curve.last().unwrap(), 0.0);
        assert!(curve.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_fallback_when_stages_overflow() {
        let env = EnvelopeShape::new(100, 50, 50, 0.7, 50);
        assert_eq!(env.attack(), 33);
        assert_eq!(env.decay(), 0);
        assert_eq!(env.sustain(), 0);
        assert_eq!(env.release(), 67);
        assert_eq!(env.total(), 100);
    }

    #[test]
    fn test_fallback_curve_never_negative_and_ends_silent() {
        for total in [1usize, 2, 3, 7, 50, 301] {
            let env = EnvelopeShape::new(total, total, total, 0.7, total);
            let curve = env.render();
            assert!(curve.iter().all(|&v| v >= 0.0), "negative level at total={total}");
            assert_eq!(*curve.last().unwrap(), 0.0, "total={total}");
        }
    }

    #[test]
    fn test_fallback_handles_overflowing_sum() {
        let env = EnvelopeShape::new(9, usize::MAX, 1, 0.7, 1);
        assert_eq!(env.attack(), 3);
        assert_eq!(env.release(), 6);
    }

    #[test]
    fn test_zero_length_shape() {
        let env = EnvelopeShape::for_note(0);
        assert!(env.render().is_empty());
        assert_eq!(env.level(0), 0.0);
    }

    #[test]
    fn test_exponential_decay() {
        assert_eq!(exponential_decay(0, 1000), 1.0);
        assert!((exponential_decay(200, 1000) - (-1.0f64).exp()).abs() < 1e-12);
        assert!(exponential_decay(999, 1000) < 0.01);
        assert_eq!(exponential_decay(0, 0), 0.0);
    }
}
