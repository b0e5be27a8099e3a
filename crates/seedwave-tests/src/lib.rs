//! Seedwave End-to-End Test Infrastructure
//!
//! This crate holds the cross-crate checks for clip generation:
//!
//! - Generation: seed -> WAV bytes that decode to the clip format
//! - Determinism: byte-identical output across runs and threads
//! - CLI: files written by the command layer verify cleanly
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p seedwave-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use seedwave_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| seedwave_audio::generate_music(7).unwrap(), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod format_validators;
