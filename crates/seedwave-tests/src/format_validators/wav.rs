//! WAV file format validator.

use super::FormatError;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// RIFF chunk size field.
    pub riff_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate field.
    pub byte_rate: u32,
    /// Block alignment field.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Offset of the first PCM byte.
    pub data_offset: usize,
    /// Data chunk size field.
    pub data_size: u32,
    /// Sample frames in the data chunk.
    pub num_samples: usize,
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Parses the RIFF/WAVE structure and extracts the fmt and data fields.
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }
    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset("WAV", "Invalid RIFF header", 0));
    }
    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset("WAV", "Invalid WAVE format", 8));
    }

    let riff_size = u32_at(data, 4);
    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;
    let mut offset = 12;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = u32_at(data, offset + 4) as usize;
        let body = offset + 8;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || body + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }
            fmt = Some((
                u16_at(data, body),
                u16_at(data, body + 2),
                u32_at(data, body + 4),
                u32_at(data, body + 8),
                u16_at(data, body + 12),
                u16_at(data, body + 14),
            ));
        } else if chunk_id == b"data" {
            let Some((audio_format, channels, sample_rate, byte_rate, block_align, bits)) = fmt
            else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };
            if body + chunk_size > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated data chunk", offset));
            }
            return Ok(WavInfo {
                riff_size,
                audio_format,
                channels,
                sample_rate,
                byte_rate,
                block_align,
                bits_per_sample: bits,
                data_offset: body,
                data_size: chunk_size as u32,
                num_samples: chunk_size.checked_div(block_align as usize).unwrap_or(0),
            });
        }

        offset = body + ((chunk_size + 1) & !1);
    }

    if fmt.is_none() {
        return Err(FormatError::new("WAV", "Missing fmt chunk"));
    }
    Err(FormatError::new("WAV", "Missing data chunk"))
}

/// Validates a preview clip: canonical 44-byte mono 16-bit PCM header at
/// 44.1 kHz holding exactly 15 seconds of audio.
pub fn validate_clip(data: &[u8]) -> Result<WavInfo, FormatError> {
    let info = validate_wav(data)?;

    let expect = |ok: bool, message: String| {
        if ok {
            Ok(())
        } else {
            Err(FormatError::new("clip", message))
        }
    };

    expect(info.audio_format == 1, format!("audio format {}", info.audio_format))?;
    expect(info.channels == 1, format!("{} channels", info.channels))?;
    expect(info.sample_rate == 44_100, format!("sample rate {}", info.sample_rate))?;
    expect(
        info.bits_per_sample == 16,
        format!("{} bits per sample", info.bits_per_sample),
    )?;
    expect(info.block_align == 2, format!("block align {}", info.block_align))?;
    expect(info.byte_rate == 88_200, format!("byte rate {}", info.byte_rate))?;
    expect(info.data_offset == 44, format!("data at offset {}", info.data_offset))?;
    expect(
        info.riff_size as usize == data.len() - 8,
        format!("RIFF size {} for {} bytes", info.riff_size, data.len()),
    )?;
    expect(
        info.num_samples == seedwave_audio::CLIP_SAMPLES,
        format!("{} samples", info.num_samples),
    )?;

    Ok(info)
}
