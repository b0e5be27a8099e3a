//! Output gain and hard limiting.

/// Fixed output gain applied after the reverb.
pub const OUTPUT_GAIN: f64 = 2.5;

/// Statistics gathered while applying the gain stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GainReport {
    /// Largest absolute sample before gain.
    pub input_peak: f64,
    /// Largest absolute sample after gain and clamping.
    pub output_peak: f64,
    /// Number of samples that hit the limiter.
    pub clipped_samples: usize,
}

/// Multiplies every sample by `gain` and clamps the result to `[-1, 1]`.
///
/// Out-of-range samples are clamped, never rescaled.
///
/// # Arguments
/// * `samples` - Samples to process in place
/// * `gain` - Linear gain factor
///
/// # Returns
/// Peak levels before and after, and the number of clamped samples
pub fn apply(samples: &mut [f64], gain: f64) -> GainReport {
    let mut report = GainReport::default();

    for sample in samples.iter_mut() {
        report.input_peak = report.input_peak.max(sample.abs());

        let amplified = *sample * gain;
        let limited = amplified.clamp(-1.0, 1.0);
        if limited != amplified {
            report.clipped_samples += 1;
        }

        report.output_peak = report.output_peak.max(limited.abs());
        *sample = limited;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_scales_in_range_samples() {
        let mut samples = vec![0.1, -0.2, 0.0];
        let report = apply(&mut samples, OUTPUT_GAIN);
        assert!((samples[0] - 0.25).abs() < 1e-12);
        assert!((samples[1] + 0.5).abs() < 1e-12);
        assert_eq!(samples[2], 0.0);
        assert_eq!(report.clipped_samples, 0);
        assert!((report.input_peak - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_hard_clamp_not_rescale() {
        let mut samples = vec![0.5, -0.9, 0.2];
        let report = apply(&mut samples, OUTPUT_GAIN);
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[1], -1.0);
        // Unclipped samples keep their scaled value.
        assert!((samples[2] - 0.5).abs() < 1e-12);
        assert_eq!(report.clipped_samples, 2);
        assert_eq!(report.output_peak, 1.0);
    }

    #[test]
    fn test_exactly_at_limit_is_not_clipped() {
        let mut samples = vec![0.5];
        let report = apply(&mut samples, 2.0);
        assert_eq!(samples[0], 1.0);
        assert_eq!(report.clipped_samples, 0);
    }
}
