//! Batch command implementation
//!
//! Renders a run of catalog items in parallel. Each item is an independent
//! render, so the output does not depend on the number of workers.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use super::render::render_to_file;

/// One rendered item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// Catalog index.
    pub index: i32,
    /// Derived render seed.
    pub seed: i32,
    /// Output path.
    pub output: String,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
}

/// JSON output for the batch command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Base seed.
    pub base_seed: i32,
    /// Items in index order.
    pub items: Vec<BatchItem>,
    /// Wall-clock time in milliseconds.
    pub elapsed_ms: u128,
}

/// File name used for item `index`.
pub fn item_file_name(index: i32) -> String {
    format!("item-{:05}.wav", index)
}

/// Renders items `start..start + count` into `out_dir`.
///
/// `jobs` bounds the worker count; `None` uses rayon's default.
pub fn render_batch(
    seed: i32,
    start: i32,
    count: u32,
    out_dir: &Path,
    jobs: Option<usize>,
) -> Result<Vec<BatchItem>> {
    let count = i32::try_from(count).context("Item count is too large")?;
    let Some(end) = start.checked_add(count) else {
        bail!("Item range {}+{} overflows a 32-bit index", start, count);
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("Failed to start worker pool")?;
    debug!(threads = pool.current_num_threads(), start, end, "rendering batch");

    pool.install(|| {
        (start..end)
            .into_par_iter()
            .map(|index| {
                let path: PathBuf = out_dir.join(item_file_name(index));
                let rendered = render_to_file(seed, Some(index), &path)?;
                Ok(BatchItem {
                    index,
                    seed: rendered.summary.seed,
                    output: rendered.output,
                    pcm_hash: rendered.summary.pcm_hash,
                })
            })
            .collect::<Result<Vec<_>>>()
    })
}

/// Run the batch command
///
/// # Arguments
/// * `seed` - Base seed
/// * `start` - First item index
/// * `count` - Number of items
/// * `out_dir` - Output directory
/// * `jobs` - Optional worker count
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    seed: i32,
    start: i32,
    count: u32,
    out_dir: &str,
    jobs: Option<usize>,
    json_output: bool,
) -> Result<ExitCode> {
    let started = Instant::now();
    let items = render_batch(seed, start, count, Path::new(out_dir), jobs)?;
    let elapsed_ms = started.elapsed().as_millis();

    if json_output {
        let output = BatchOutput {
            base_seed: seed,
            items,
            elapsed_ms,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        for item in &items {
            println!(
                "{} {} {} {}",
                "✓".green(),
                item.output,
                format!("seed {}", item.seed).dimmed(),
                &item.pcm_hash[..16]
            );
        }
        println!(
            "{} {} items in {} ms",
            "Rendered".green().bold(),
            items.len(),
            elapsed_ms
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_file_name() {
        assert_eq!(item_file_name(7), "item-00007.wav");
    }

    #[test]
    fn test_batch_independent_of_worker_count() {
        let one = tempfile::tempdir().unwrap();
        let many = tempfile::tempdir().unwrap();

        let serial = render_batch(12345, 0, 3, one.path(), Some(1)).unwrap();
        let parallel = render_batch(12345, 0, 3, many.path(), Some(3)).unwrap();

        let hashes = |items: &[BatchItem]| {
            items
                .iter()
                .map(|i| (i.index, i.seed, i.pcm_hash.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(hashes(&serial), hashes(&parallel));
        assert!(one.path().join("item-00002.wav").exists());
    }

    #[test]
    fn test_batch_rejects_overflowing_range() {
        let dir = tempfile::tempdir().unwrap();
        assert!(render_batch(1, i32::MAX, 2, dir.path(), Some(1)).is_err());
    }
}
