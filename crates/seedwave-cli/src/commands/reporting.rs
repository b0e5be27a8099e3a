//! Shared helpers for command output.

use colored::Colorize;
use seedwave_audio::{derive_item_seed, ClipSummary};

/// Picks the render seed: `seed` itself, or the item seed derived from it
/// when an index is given.
pub fn resolve_seed(seed: i32, index: Option<i32>) -> i32 {
    match index {
        Some(index) => derive_item_seed(seed, index),
        None => seed,
    }
}

/// Pitch number as a note name, e.g. 60 -> "C4".
pub(crate) fn note_name(pitch: i32) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let octave = pitch.div_euclid(12) - 1;
    format!("{}{}", NAMES[pitch.rem_euclid(12) as usize], octave)
}

/// Prints a colored multi-line summary of a rendered clip.
pub(crate) fn print_summary(summary: &ClipSummary) {
    println!("  {} {}", "Seed:".dimmed(), summary.seed);
    println!(
        "  {} {} BPM, root {} ({})",
        "Tempo:".dimmed(),
        summary.tempo_bpm,
        note_name(summary.root_pitch),
        summary.root_pitch
    );
    println!("  {} {:?}", "Progression:".dimmed(), summary.progression);
    println!(
        "  {} {} melody, {} bass, {} hi-hat",
        "Events:".dimmed(),
        summary.melody_notes,
        summary.bass_notes,
        summary.hihat_hits
    );
    println!(
        "  {} mix {:.3}, output {:.3}, {} clipped",
        "Peak:".dimmed(),
        summary.mix_peak,
        summary.output_peak,
        summary.clipped_samples
    );
    println!("  {} {}", "PCM hash:".dimmed(), summary.pcm_hash);
}
