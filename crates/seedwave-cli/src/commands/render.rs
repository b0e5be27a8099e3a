//! Render command implementation
//!
//! Renders one clip and writes it as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use seedwave_audio::{render_clip, ClipSummary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::reporting::{print_summary, resolve_seed};

/// JSON output for the render command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Path the WAV was written to.
    pub output: String,
    /// Seed given on the command line.
    pub base_seed: i32,
    /// Item index, when the seed was derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    /// Size of the written file.
    pub bytes: usize,
    /// Render summary.
    pub summary: ClipSummary,
}

/// Renders the clip and writes it to `output`.
pub fn render_to_file(seed: i32, index: Option<i32>, output: &Path) -> Result<RenderOutput> {
    let render_seed = resolve_seed(seed, index);
    let clip = render_clip(render_seed)
        .with_context(|| format!("Failed to render clip for seed {}", render_seed))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &clip.wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", output.display()))?;

    info!(seed = render_seed, path = %output.display(), "wrote clip");

    Ok(RenderOutput {
        output: output.display().to_string(),
        base_seed: seed,
        index,
        bytes: clip.wav.wav_data.len(),
        summary: clip.summary,
    })
}

/// Run the render command
///
/// # Arguments
/// * `seed` - Clip seed, or base seed when `index` is given
/// * `index` - Optional catalog item index
/// * `output` - Output WAV path
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(seed: i32, index: Option<i32>, output: &str, json_output: bool) -> Result<ExitCode> {
    let result = render_to_file(seed, index, Path::new(output))?;

    if json_output {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        println!("{} {}", "Rendered:".green().bold(), result.output);
        if let Some(index) = result.index {
            println!(
                "  {} base {} item {}",
                "Derived from:".dimmed(),
                result.base_seed,
                index
            );
        }
        print_summary(&result.summary);
        println!("  {} {} bytes", "Size:".dimmed(), result.bytes);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_file_writes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("clip.wav");

        let result = render_to_file(12345, Some(1), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), result.bytes);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(result.summary.seed, 382_696);
        assert_eq!(result.index, Some(1));
    }
}
