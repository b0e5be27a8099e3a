//! Deterministic WAV encoder.
//!
//! Writes canonical 44-byte-header, 16-bit PCM mono WAV files with no
//! timestamps or variable metadata, so equal samples always give equal bytes.
//! The BLAKE3 hash of the PCM data identifies a clip's audio content.

mod format;
mod header;
mod pcm;
mod result;
mod writer;


pub use format::WavFormat;
pub use header::{parse_header, WavHeader, WavHeaderError};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, HEADER_SIZE};
