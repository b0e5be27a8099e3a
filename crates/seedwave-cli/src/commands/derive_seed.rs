//! Derive-seed command implementation

use anyhow::Result;
use seedwave_audio::derive_item_seed;
use std::process::ExitCode;

/// Run the derive-seed command, printing the item seed on stdout.
pub fn run(seed: i32, index: i32) -> Result<ExitCode> {
    println!("{}", derive_item_seed(seed, index));
    Ok(ExitCode::SUCCESS)
}
