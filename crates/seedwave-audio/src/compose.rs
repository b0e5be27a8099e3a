//! Seeded composition: tempo, key, chord progression, and note events.
//!
//! Determinism depends on the order of draws from the [`SeedSource`], which
//! is fixed as follows:
//!
//! 1. tempo (`int_in(90, 140)`)
//! 2. root pitch (`int_in(48, 60)`)
//! 3. chord progression (`pick` from [`PROGRESSIONS`])
//! 4. melody, for each of the 16 beats in order: `chance(0.7)`, and when a
//!    note is emitted, `pick` from [`PENTATONIC`] then `float_in(0.3, 0.9)`
//!    for the duration factor
//!
//! Bass and hi-hat tracks are generated after the melody and draw nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::note::{NoteEvent, Track};
use crate::rng::SeedSource;

/// Tempo range in beats per minute (inclusive).
pub const TEMPO_RANGE: (i32, i32) = (90, 140);

/// Root pitch range (inclusive), C3 to C4.
pub const ROOT_RANGE: (i32, i32) = (48, 60);

/// Chord progressions as per-bar semitone offsets from the root.
pub const PROGRESSIONS: [[i32; 4]; 5] = [
    [0, 5, 7, 5], // I-V-vi-V
    [0, 7, 5, 5], // I-vi-V-V
    [0, 5, 3, 7], // I-V-IV-vi
    [0, 3, 7, 5], // I-IV-vi-V
    [7, 5, 0, 0], // vi-V-I-I
];

/// Melody scale degrees in semitones.
pub const PENTATONIC: [i32; 6] = [0, 2, 4, 7, 9, 12];

/// Number of bars in a clip.
pub const BARS: usize = 4;

/// Beats per bar.
pub const BEATS_PER_BAR: usize = 4;

/// Probability that a melody beat carries a note.
pub const MELODY_DENSITY: f64 = 0.7;

/// Melody note length as a fraction of a beat, `[lo, hi)`.
pub const MELODY_LENGTH_RANGE: (f64, f64) = (0.3, 0.9);

/// Melody amplitude.
pub const MELODY_AMPLITUDE: f64 = 0.25;

/// Bass plays this many semitones below the root.
pub const BASS_DROP: i32 = 24;

/// Bass note length as a fraction of a beat.
pub const BASS_LENGTH: f64 = 0.6;

/// Bass amplitude.
pub const BASS_AMPLITUDE: f64 = 0.35;

/// Number of hi-hat hits (one per half beat).
pub const HIHAT_HITS: usize = 32;

/// Hi-hat burst length as a fraction of a beat.
pub const HIHAT_LENGTH: f64 = 0.15;

/// Hi-hat amplitude.
pub const HIHAT_AMPLITUDE: f64 = 0.10;

/// Everything the composer decided for one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Tempo in beats per minute.
    pub tempo_bpm: i32,
    /// Root pitch number.
    pub root_pitch: i32,
    /// Per-bar chord offsets.
    pub progression: [i32; 4],
    /// Lead line.
    pub melody: Track,
    /// One note per beat, two octaves below the root.
    pub bass: Track,
    /// Noise bursts on every half beat.
    pub hihat: Track,
}

impl Composition {
    /// Length of one beat in seconds.
    pub fn beat_duration(&self) -> f64 {
        beat_duration(self.tempo_bpm)
    }

    /// Tracks in render order.
    pub fn tracks(&self) -> [&Track; 3] {
        [&self.melody, &self.bass, &self.hihat]
    }
}

/// Length of one beat in seconds at `tempo_bpm`.
pub fn beat_duration(tempo_bpm: i32) -> f64 {
    60.0 / tempo_bpm as f64
}

/// Rule-based composer drawing all decisions from a [`SeedSource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Composer;

impl Composer {
    /// Creates a composer.
    pub fn new() -> Self {
        Self
    }

    /// Composes a clip, consuming draws in the documented order.
    pub fn compose(&self, source: &mut SeedSource) -> Composition {
        let tempo_bpm = source.int_in(TEMPO_RANGE.0, TEMPO_RANGE.1);
        let root_pitch = source.int_in(ROOT_RANGE.0, ROOT_RANGE.1);
        let progression = source.pick(&PROGRESSIONS);
        let beat = beat_duration(tempo_bpm);

        let melody = melody_track(source, &progression, root_pitch, beat);
        let bass = bass_track(&progression, root_pitch, beat);
        let hihat = hihat_track(beat);

        debug!(
            seed = source.seed(),
            tempo_bpm,
            root_pitch,
            ?progression,
            melody_notes = melody.len(),
            "composed clip"
        );

        Composition {
            tempo_bpm,
            root_pitch,
            progression,
            melody,
            bass,
            hihat,
        }
    }
}

fn melody_track(
    source: &mut SeedSource,
    progression: &[i32; 4],
    root_pitch: i32,
    beat: f64,
) -> Track {
    let mut track = Track::new("melody");

    for (bar, &chord) in progression.iter().enumerate().take(BARS) {
        for step in 0..BEATS_PER_BAR {
            if !source.chance(MELODY_DENSITY) {
                continue;
            }
            let degree = source.pick(&PENTATONIC);
            let length = source.float_in(MELODY_LENGTH_RANGE.0, MELODY_LENGTH_RANGE.1);
            let start = (bar * BEATS_PER_BAR + step) as f64 * beat;

            track.push(NoteEvent::tone(
                root_pitch + chord + degree,
                start,
                beat * length,
                MELODY_AMPLITUDE,
            ));
        }
    }

    track
}

fn bass_track(progression: &[i32; 4], root_pitch: i32, beat: f64) -> Track {
    let mut track = Track::new("bass");
    let bass_root = root_pitch - BASS_DROP;

    for (bar, &chord) in progression.iter().enumerate().take(BARS) {
        for step in 0..BEATS_PER_BAR {
            let start = (bar * BEATS_PER_BAR + step) as f64 * beat;
            track.push(NoteEvent::tone(
                bass_root + chord,
                start,
                beat * BASS_LENGTH,
                BASS_AMPLITUDE,
            ));
        }
    }

    track
}

fn hihat_track(beat: f64) -> Track {
    let mut track = Track::new("hihat");
    let spacing = beat / 2.0;

    for hit in 0..HIHAT_HITS {
        track.push(NoteEvent::noise(
            hit as f64 * spacing,
            beat * HIHAT_LENGTH,
            HIHAT_AMPLITUDE,
        ));
    }

    track
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Voice;
    use crate::CLIP_SECONDS;
    use pretty_assertions::assert_eq;

    fn compose(seed: i32) -> Composition {
        Composer::new().compose(&mut SeedSource::new(seed))
    }

    #[test]
    fn test_same_seed_same_composition() {
        assert_eq!(compose(12345), compose(12345));
    }

    #[test]
    fn test_parameters_within_ranges() {
        for seed in 0..200 {
            let c = compose(seed);
            assert!((90..=140).contains(&c.tempo_bpm));
            assert!((48..=60).contains(&c.root_pitch));
            assert!(PROGRESSIONS.contains(&c.progression));
        }
    }

    #[test]
    fn test_tracks_fit_in_clip() {
        for seed in 0..200 {
            let c = compose(seed);
            for track in c.tracks() {
                assert!(track.span() <= CLIP_SECONDS, "{} overruns clip", track.name);
            }
        }
    }

    #[test]
    fn test_bass_follows_progression() {
        let c = compose(7);
        assert_eq!(c.bass.len(), 16);
        for (i, event) in c.bass.events.iter().enumerate() {
            let chord = c.progression[i / 4];
            assert_eq!(event.pitch, c.root_pitch - 24 + chord);
            assert_eq!(event.voice, Voice::Sine);
            assert_eq!(event.amplitude, BASS_AMPLITUDE);
            assert!((event.start - i as f64 * c.beat_duration()).abs() < 1e-12);
            assert!((event.duration - c.beat_duration() * 0.6).abs() < 1e-12);
        }
    }

    #[test]
    fn test_melody_notes_on_beat_grid_and_in_scale() {
        for seed in 0..50 {
            let c = compose(seed);
            assert!(c.melody.len() <= 16);
            let beat = c.beat_duration();
            for event in &c.melody.events {
                let beat_index = (event.start / beat).round() as usize;
                assert!((event.start - beat_index as f64 * beat).abs() < 1e-9);
                let chord = c.progression[beat_index / 4];
                let degree = event.pitch - c.root_pitch - chord;
                assert!(PENTATONIC.contains(&degree));
                assert!(event.duration >= beat * 0.3 && event.duration < beat * 0.9);
                assert_eq!(event.amplitude, MELODY_AMPLITUDE);
            }
        }
    }

    #[test]
    fn test_hihat_grid() {
        let c = compose(99);
        let beat = c.beat_duration();
        assert_eq!(c.hihat.len(), 32);
        for (i, event) in c.hihat.events.iter().enumerate() {
            assert_eq!(event.voice, Voice::Noise);
            assert!((event.start - i as f64 * beat / 2.0).abs() < 1e-12);
            assert!((event.duration - beat * 0.15).abs() < 1e-12);
            assert_eq!(event.amplitude, HIHAT_AMPLITUDE);
        }
    }

    #[test]
    fn test_draw_order_matches_manual_replay() {
        let seed = 2024;
        let c = compose(seed);

        let mut source = SeedSource::new(seed);
        assert_eq!(source.int_in(90, 140), c.tempo_bpm);
        assert_eq!(source.int_in(48, 60), c.root_pitch);
        assert_eq!(source.pick(&PROGRESSIONS), c.progression);

        let mut notes = c.melody.events.iter();
        for _ in 0..16 {
            if source.chance(0.7) {
                let degree = source.pick(&PENTATONIC);
                let length = source.float_in(0.3, 0.9);
                let event = notes.next().expect("melody note for emitted beat");
                assert_eq!(event.duration, c.beat_duration() * length);
                assert!(PENTATONIC.contains(&degree));
            }
        }
        assert!(notes.next().is_none());
    }

    #[test]
    fn test_some_seeds_differ() {
        let distinct: std::collections::HashSet<_> =
            (0..20).map(|s| (compose(s).tempo_bpm, compose(s).root_pitch)).collect();
        assert!(distinct.len() > 1);
    }
}
