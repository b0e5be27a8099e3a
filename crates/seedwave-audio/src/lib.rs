//! Seedwave Audio Core
//!
//! Renders a short instrumental clip from a single integer seed. The same
//! seed always produces the same bytes, on any platform.
//!
//! # Overview
//!
//! The pipeline, leaves first:
//!
//! - [`rng::SeedSource`] - the clip's only source of randomness (PCG32)
//! - [`compose::Composer`] - tempo, key, progression, and melody/bass/hi-hat events
//! - [`synthesis`] - enveloped sine tones and decaying noise bursts
//! - [`mixer`] - per-track buses summed into one mono mix
//! - [`effects::ReverbUnit`] - four parallel feedback delay taps
//! - [`gain`] - fixed output gain with a hard limiter
//! - [`wav`] - canonical 16-bit PCM WAV encoding
//!
//! # Example
//!
//! ```no_run
//! use seedwave_audio::{generate_music, rng::derive_item_seed};
//!
//! let seed = derive_item_seed(12345, 1);
//! let wav = generate_music(seed)?;
//! std::fs::write("preview.wav", &wav)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency
//!
//! Rendering holds no global state. Clips for different seeds can be
//! rendered on separate threads without coordination.

pub mod buffer;
pub mod compose;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod gain;
pub mod generate;
pub mod mixer;
pub mod note;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use generate::{
    compose_clip, generate_item_music, generate_music, render_clip, render_samples, ClipResult,
    ClipSummary,
};
pub use rng::{derive_item_seed, SeedSource};
pub use wav::WavResult;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Output sample rate as a float, for DSP arithmetic.
pub const SAMPLE_RATE_F64: f64 = SAMPLE_RATE as f64;

/// Clip length in seconds.
pub const CLIP_SECONDS: f64 = 15.0;

/// Clip length in samples.
pub const CLIP_SAMPLES: usize = 15 * SAMPLE_RATE as usize;
