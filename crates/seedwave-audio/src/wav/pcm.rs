//! PCM data extraction and hashing.

/// Extracts the `data` chunk payload from a WAV file buffer.
///
/// Walks the RIFF chunk list, so extra chunks before `data` are skipped.
/// Returns `None` if the buffer is not a RIFF/WAVE file or has no complete
/// `data` chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let data_start = pos + 8;
        let data_end = data_start.checked_add(chunk_size)?;

        if chunk_id == b"data" {
            return wav_data.get(data_start..data_end);
        }

        // Chunks are word aligned.
        pos = data_end + (chunk_size & 1);
    }

    None
}

/// BLAKE3 hash of the PCM payload of a WAV file, as lowercase hex.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// 64-character hex hash, or `None` if there is no `data` chunk
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
