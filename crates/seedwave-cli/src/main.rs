//! Seedwave CLI - Command-line interface for seeded preview clips
//!
//! Renders, inspects, and verifies the 15 second WAV clips produced by
//! `seedwave-audio`.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use seedwave_cli::{commands, logging};

/// Seedwave - Deterministic procedural music clips
#[derive(Parser)]
#[command(name = "seedwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a clip to a WAV file
    Render {
        /// Clip seed, or base seed when --index is given
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// Catalog item index; renders the derived item seed
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i32>,

        /// Output WAV path
        #[arg(short, long, default_value = "clip.wav")]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the composition for a seed as JSON without rendering
    Inspect {
        /// Clip seed, or base seed when --index is given
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// Catalog item index
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i32>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Render a range of catalog items in parallel
    Batch {
        /// Base seed
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// First item index
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i32,

        /// Number of items to render
        #[arg(short, long)]
        count: u32,

        /// Output directory
        #[arg(short, long)]
        out_dir: String,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check a WAV file against the clip format
    Verify {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the seed used for a catalog item
    DeriveSeed {
        /// Base seed
        #[arg(short, long, allow_negative_numbers = true)]
        seed: i32,

        /// Item index
        #[arg(short, long, allow_negative_numbers = true)]
        index: i32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            seed,
            index,
            output,
            json,
        } => commands::render::run(seed, index, &output, json),
        Commands::Inspect {
            seed,
            index,
            pretty,
        } => commands::inspect::run(seed, index, pretty),
        Commands::Batch {
            seed,
            start,
            count,
            out_dir,
            jobs,
            json,
        } => commands::batch::run(seed, start, count, &out_dir, jobs, json),
        Commands::Verify { input, json } => commands::verify::run(&input, json),
        Commands::DeriveSeed { seed, index } => commands::derive_seed::run(seed, index),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render_with_index() {
        let cli = Cli::try_parse_from([
            "seedwave", "render", "--seed", "12345", "--index", "1", "-o", "out.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                seed,
                index,
                output,
                json,
            } => {
                assert_eq!(seed, 12345);
                assert_eq!(index, Some(1));
                assert_eq!(output, "out.wav");
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_seed() {
        let cli = Cli::try_parse_from(["seedwave", "inspect", "--seed", "-42"]).unwrap();
        match cli.command {
            Commands::Inspect { seed, index, .. } => {
                assert_eq!(seed, -42);
                assert_eq!(index, None);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_batch_defaults() {
        let cli = Cli::try_parse_from(["seedwave", "batch", "-s", "7", "-c", "4", "-o", "out"]).unwrap();
        match cli.command {
            Commands::Batch {
                seed,
                start,
                count,
                out_dir,
                jobs,
                json,
            } => {
                assert_eq!(seed, 7);
                assert_eq!(start, 0);
                assert_eq!(count, 4);
                assert_eq!(out_dir, "out");
                assert_eq!(jobs, None);
                assert!(!json);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let cli = Cli::try_parse_from(["seedwave", "verify", "-i", "clip.wav", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Verify { .. }));
    }

    #[test]
    fn test_cli_parses_derive_seed() {
        let cli =
            Cli::try_parse_from(["seedwave", "derive-seed", "--seed", "12345", "--index", "1"])
                .unwrap();
        match cli.command {
            Commands::DeriveSeed { seed, index } => {
                assert_eq!(seed, 12345);
                assert_eq!(index, 1);
            }
            _ => panic!("expected derive-seed command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["seedwave"]).is_err());
    }
}
