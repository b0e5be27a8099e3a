//! Verify command implementation
//!
//! Decodes a WAV file independently of the encoder and checks it against
//! the clip format: mono, 44.1 kHz, 16-bit, exactly 15 seconds, samples
//! within [-1, 1].

use anyhow::{Context, Result};
use colored::Colorize;
use seedwave_audio::wav::{compute_pcm_hash, parse_header};
use seedwave_audio::{CLIP_SAMPLES, SAMPLE_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::process::ExitCode;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check name.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
    /// Observed value.
    pub detail: String,
}

impl CheckResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

/// JSON output for the verify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutput {
    /// File that was checked.
    pub input: String,
    /// Whether every check passed.
    pub success: bool,
    /// Individual checks.
    pub checks: Vec<CheckResult>,
    /// BLAKE3 hash of the PCM data, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

/// Checks a WAV file held in memory.
pub fn verify_bytes(input: &str, bytes: &[u8]) -> Result<VerifyOutput> {
    let mut checks = Vec::new();

    match parse_header(bytes) {
        Ok(_) => checks.push(CheckResult::new("header", true, "canonical PCM header")),
        Err(e) => checks.push(CheckResult::new("header", false, e.to_string())),
    }

    let reader = hound::WavReader::new(Cursor::new(bytes)).context("Failed to decode WAV")?;
    let spec = reader.spec();
    checks.push(CheckResult::new(
        "channels",
        spec.channels == 1,
        spec.channels.to_string(),
    ));
    checks.push(CheckResult::new(
        "sample_rate",
        spec.sample_rate == SAMPLE_RATE,
        spec.sample_rate.to_string(),
    ));
    checks.push(CheckResult::new(
        "bits_per_sample",
        spec.bits_per_sample == 16 && spec.sample_format == hound::SampleFormat::Int,
        format!("{} ({:?})", spec.bits_per_sample, spec.sample_format),
    ));

    if spec.bits_per_sample == 16 && spec.sample_format == hound::SampleFormat::Int {
        let samples = reader
            .into_samples::<i16>()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read samples")?;
        let frames = samples.len() / spec.channels.max(1) as usize;
        checks.push(CheckResult::new(
            "duration",
            frames == CLIP_SAMPLES,
            format!("{} samples", frames),
        ));

        let peak = samples
            .iter()
            .map(|&s| (s as f64 / 32768.0).abs())
            .fold(0.0, f64::max);
        checks.push(CheckResult::new(
            "amplitude",
            peak <= 1.0,
            format!("peak {:.4}", peak),
        ));
    }

    let success = checks.iter().all(|c| c.passed);
    Ok(VerifyOutput {
        input: input.to_string(),
        success,
        checks,
        pcm_hash: compute_pcm_hash(bytes),
    })
}

/// Run the verify command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes =
        fs::read(Path::new(input)).with_context(|| format!("Failed to read file: {}", input))?;
    let output = verify_bytes(input, &bytes)?;

    if json_output {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        println!("{} {}", "Verifying:".cyan().bold(), input);
        for check in &output.checks {
            let mark = if check.passed {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("  {} {} {}", mark, check.name, check.detail.dimmed());
        }
        if let Some(hash) = &output.pcm_hash {
            println!("  {} {}", "PCM hash:".dimmed(), hash);
        }
        if output.success {
            println!("{}", "All checks passed".green().bold());
        } else {
            println!("{}", "Verification failed".red().bold());
        }
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
