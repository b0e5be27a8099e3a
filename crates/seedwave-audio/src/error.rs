//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering a clip.
///
/// Rendering is a pure computation over fixed-size buffers, so the only
/// condition expected in practice is [`AudioError::Allocation`].
#[derive(Debug, Error)]
pub enum AudioError {
    /// A working buffer could not be reserved.
    #[error("failed to allocate a buffer of {samples} samples")]
    Allocation {
        /// Requested buffer length in samples.
        samples: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while writing the container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Allocation { .. } => "AUDIO_001",
            AudioError::InvalidParameter { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("gain", "must be finite");
        assert!(err.to_string().contains("gain"));
        assert!(err.to_string().contains("must be finite"));
        assert_eq!(err.code(), "AUDIO_002");
    }

    #[test]
    fn test_allocation_message() {
        let err = AudioError::Allocation { samples: 661_500 };
        assert_eq!(err.to_string(), "failed to allocate a buffer of 661500 samples");
        assert_eq!(err.code(), "AUDIO_001");
    }
}
