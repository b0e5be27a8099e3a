//! Inspect command implementation
//!
//! Prints the composition for a seed as JSON without rendering audio.

use anyhow::{Context, Result};
use seedwave_audio::compose::Composition;
use seedwave_audio::compose_clip;
use serde::Serialize;
use std::process::ExitCode;

use super::reporting::resolve_seed;

/// JSON output for the inspect command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Seed the composition was drawn from.
    pub seed: i32,
    /// Beat length in seconds.
    pub beat_seconds: f64,
    /// The composition.
    pub composition: Composition,
}

/// Builds the inspect output for a seed.
pub fn inspect(seed: i32, index: Option<i32>) -> InspectOutput {
    let seed = resolve_seed(seed, index);
    let composition = compose_clip(seed);
    InspectOutput {
        seed,
        beat_seconds: composition.beat_duration(),
        composition,
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `seed` - Clip seed, or base seed when `index` is given
/// * `index` - Optional catalog item index
/// * `pretty` - Pretty-print the output JSON
pub fn run(seed: i32, index: Option<i32>, pretty: bool) -> Result<ExitCode> {
    let output = inspect(seed, index);
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize composition")?;

    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
