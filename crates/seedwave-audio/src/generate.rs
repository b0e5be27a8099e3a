//! Clip generation pipeline.
//!
//! seed -> [`SeedSource`] -> [`Composer`] -> per-track [`TrackBus`] ->
//! [`Mixer`] -> [`ReverbUnit`] -> gain stage -> [`WavResult`].
//!
//! Every buffer is owned by one stage at a time and moved to the next.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::{Composer, Composition};
use crate::effects::ReverbUnit;
use crate::error::AudioResult;
use crate::gain::{self, GainReport, OUTPUT_GAIN};
use crate::mixer::{Mixer, TrackBus};
use crate::rng::{derive_item_seed, SeedSource};
use crate::wav::WavResult;
use crate::{CLIP_SAMPLES, SAMPLE_RATE, SAMPLE_RATE_F64};

/// What was rendered, for logs and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSummary {
    /// Seed the clip was rendered from.
    pub seed: i32,
    /// Tempo in beats per minute.
    pub tempo_bpm: i32,
    /// Root pitch number.
    pub root_pitch: i32,
    /// Per-bar chord offsets.
    pub progression: [i32; 4],
    /// Number of melody notes.
    pub melody_notes: usize,
    /// Number of bass notes.
    pub bass_notes: usize,
    /// Number of hi-hat hits.
    pub hihat_hits: usize,
    /// Largest absolute sample entering the gain stage.
    pub mix_peak: f64,
    /// Largest absolute sample in the output.
    pub output_peak: f64,
    /// Samples that hit the limiter.
    pub clipped_samples: usize,
    /// Samples in the output.
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

impl ClipSummary {
    fn new(seed: i32, composition: &Composition, gain: &GainReport, wav: &WavResult) -> Self {
        Self {
            seed,
            tempo_bpm: composition.tempo_bpm,
            root_pitch: composition.root_pitch,
            progression: composition.progression,
            melody_notes: composition.melody.len(),
            bass_notes: composition.bass.len(),
            hihat_hits: composition.hihat.len(),
            mix_peak: gain.input_peak,
            output_peak: gain.output_peak,
            clipped_samples: gain.clipped_samples,
            num_samples: wav.num_samples,
            pcm_hash: wav.pcm_hash.clone(),
        }
    }
}

/// Result of rendering one clip.
#[derive(Debug, Clone)]
pub struct ClipResult {
    /// Encoded container and PCM hash.
    pub wav: WavResult,
    /// The composition that was rendered.
    pub composition: Composition,
    /// Render summary.
    pub summary: ClipSummary,
}

/// Composes a clip without rendering it.
pub fn compose_clip(seed: i32) -> Composition {
    Composer::new().compose(&mut SeedSource::new(seed))
}

/// Renders the mixed, reverberated, gain-staged samples for `seed`.
///
/// Returns the composition, the final samples, and the gain statistics.
pub fn render_samples(seed: i32) -> AudioResult<(Composition, Vec<f64>, GainReport)> {
    let mut source = SeedSource::new(seed);
    let composition = Composer::new().compose(&mut source);

    let mut mixer = Mixer::new(CLIP_SAMPLES);
    for track in composition.tracks() {
        mixer.add_bus(TrackBus::render(
            track,
            CLIP_SAMPLES,
            SAMPLE_RATE_F64,
            &mut source,
        )?);
    }
    let mut samples = mixer.mix_mono()?;

    ReverbUnit::new(SAMPLE_RATE_F64)?.process(&mut samples);
    let report = gain::apply(&mut samples, OUTPUT_GAIN);

    debug!(
        seed,
        mix_peak = report.input_peak,
        clipped = report.clipped_samples,
        "rendered clip samples"
    );

    Ok((composition, samples, report))
}

/// Renders and encodes the clip for `seed`.
pub fn render_clip(seed: i32) -> AudioResult<ClipResult> {
    let (composition, samples, report) = render_samples(seed)?;
    let wav = WavResult::from_mono(&samples, SAMPLE_RATE)?;
    let summary = ClipSummary::new(seed, &composition, &report, &wav);

    debug!(seed, pcm_hash = %wav.pcm_hash, bytes = wav.wav_data.len(), "encoded clip");

    Ok(ClipResult {
        wav,
        composition,
        summary,
    })
}

/// Renders the clip for `seed` as a complete WAV file.
///
/// The output is a pure function of `seed`: 15 seconds of 16-bit mono audio
/// at 44.1 kHz, byte-identical on every call.
///
/// # Arguments
/// * `seed` - Clip seed
///
/// # Returns
/// Complete WAV file bytes, or an error if a working buffer could not be
/// allocated
pub fn generate_music(seed: i32) -> AudioResult<Vec<u8>> {
    Ok(render_clip(seed)?.wav.wav_data)
}

/// Renders the clip for catalog item `index` under `base_seed`.
///
/// # Arguments
/// * `base_seed` - Catalog base seed
/// * `index` - Item index
///
/// # Returns
/// Complete WAV file bytes for the derived seed
pub fn generate_item_music(base_seed: i32, index: i32) -> AudioResult<Vec<u8>> {
    generate_music(derive_item_seed(base_seed, index))
}
