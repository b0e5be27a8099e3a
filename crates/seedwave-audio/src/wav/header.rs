//! Canonical header parsing.

use thiserror::Error;

/// Errors from [`parse_header`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WavHeaderError {
    /// Fewer than 44 bytes.
    #[error("file too short for a WAV header: {len} bytes")]
    TooShort {
        /// Actual length.
        len: usize,
    },
    /// Missing or wrong four-character code.
    #[error("expected '{expected}' at offset {offset}")]
    BadMagic {
        /// Expected tag.
        expected: &'static str,
        /// Byte offset of the tag.
        offset: usize,
    },
    /// Format tag other than integer PCM.
    #[error("unsupported audio format tag {0}")]
    UnsupportedFormat(u16),
    /// Declared sizes disagree with the buffer.
    #[error("declared {field} of {declared} does not match actual {actual}")]
    SizeMismatch {
        /// Header field name.
        field: &'static str,
        /// Value in the header.
        declared: u32,
        /// Value implied by the buffer.
        actual: u32,
    },
}

/// Fields of a canonical 44-byte PCM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file length minus 8).
    pub riff_size: u32,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the data chunk payload.
    pub data_size: u32,
}

impl WavHeader {
    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> u32 {
        if self.block_align == 0 {
            0
        } else {
            self.data_size / self.block_align as u32
        }
    }
}

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &'static str) -> Result<(), WavHeaderError> {
    if &bytes[offset..offset + 4] == tag.as_bytes() {
        Ok(())
    } else {
        Err(WavHeaderError::BadMagic {
            expected: tag,
            offset,
        })
    }
}

/// Parses and cross-checks a canonical PCM WAV header.
///
/// Checks the chunk tags, the PCM format tag, the RIFF and data sizes against
/// the buffer length, and the derived byte rate / block align fields.
///
/// # Arguments
/// * `bytes` - Complete WAV file bytes
///
/// # Returns
/// The header fields, or the first inconsistency found
pub fn parse_header(bytes: &[u8]) -> Result<WavHeader, WavHeaderError> {
    if bytes.len() < 44 {
        return Err(WavHeaderError::TooShort { len: bytes.len() });
    }

    expect_tag(bytes, 0, "RIFF")?;
    expect_tag(bytes, 8, "WAVE")?;
    expect_tag(bytes, 12, "fmt ")?;
    expect_tag(bytes, 36, "data")?;

    let format_tag = u16_at(bytes, 20);
    if format_tag != 1 {
        return Err(WavHeaderError::UnsupportedFormat(format_tag));
    }

    let header = WavHeader {
        riff_size: u32_at(bytes, 4),
        channels: u16_at(bytes, 22),
        sample_rate: u32_at(bytes, 24),
        byte_rate: u32_at(bytes, 28),
        block_align: u16_at(bytes, 32),
        bits_per_sample: u16_at(bytes, 34),
        data_size: u32_at(bytes, 40),
    };

    let actual_riff = (bytes.len() - 8) as u32;
    if header.riff_size != actual_riff {
        return Err(WavHeaderError::SizeMismatch {
            field: "RIFF size",
            declared: header.riff_size,
            actual: actual_riff,
        });
    }

    let actual_data = (bytes.len() - 44) as u32;
    if header.data_size != actual_data {
        return Err(WavHeaderError::SizeMismatch {
            field: "data size",
            declared: header.data_size,
            actual: actual_data,
        });
    }

    let block_align = header.channels as u32 * (header.bits_per_sample as u32 / 8);
    if header.block_align as u32 != block_align {
        return Err(WavHeaderError::SizeMismatch {
            field: "block align",
            declared: header.block_align as u32,
            actual: block_align,
        });
    }

    let byte_rate = header.sample_rate.checked_mul(block_align);
    if byte_rate != Some(header.byte_rate) {
        return Err(WavHeaderError::SizeMismatch {
            field: "byte rate",
            declared: header.byte_rate,
            actual: header.sample_rate.saturating_mul(block_align),
        });
    }

    Ok(header)
}
