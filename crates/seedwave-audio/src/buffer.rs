//! Sample buffer allocation.
//!
//! Every stage allocates through [`silence`] so that an allocation failure
//! surfaces as [`AudioError::Allocation`] instead of aborting the process.

use crate::error::{AudioError, AudioResult};

/// Allocates a zero-filled mono buffer of `num_samples` samples.
pub fn silence(num_samples: usize) -> AudioResult<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(num_samples)
        .map_err(|_| AudioError::Allocation {
            samples: num_samples,
        })?;
    buffer.resize(num_samples, 0.0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_is_zeroed() {
        let buffer = silence(128).unwrap();
        assert_eq!(buffer.len(), 128);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_silence_empty() {
        assert!(silence(0).unwrap().is_empty());
    }

    #[test]
    fn test_silence_reports_impossible_allocation() {
        let err = silence(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            AudioError::Allocation { samples } if samples == usize::MAX
        ));
    }
}
