//! Container and PCM serialization.

use std::io::{self, Write};

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Size of the canonical RIFF/fmt/data header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success, or an I/O error if the data does not fit in a
/// RIFF container
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|&size| size <= u32::MAX - 36)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "PCM data exceeds RIFF size limit",
            )
        })?;
    let riff_size = 36 + data_size; // everything after the 8-byte RIFF preamble

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let len = HEADER_SIZE + pcm_data.len();
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| AudioError::Allocation { samples: len })?;
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts samples to little-endian 16-bit PCM bytes.
///
/// Values outside `[-1, 1]` are clamped.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data as little-endian 16-bit samples, scaled by 32767
pub fn samples_to_pcm16(samples: &[f64]) -> AudioResult<Vec<u8>> {
    let len = samples
        .len()
        .checked_mul(2)
        .ok_or(AudioError::Allocation {
            samples: samples.len(),
        })?;
    let mut pcm = Vec::new();
    pcm.try_reserve_exact(len)
        .map_err(|_| AudioError::Allocation { samples: len })?;

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    Ok(pcm)
}
