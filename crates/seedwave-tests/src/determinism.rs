//! Determinism checks for rendered clips.
//!
//! A clip is a pure function of its seed. These helpers render the same
//! seed repeatedly, on one thread or many, and report the first byte that
//! differs.

use rayon::prelude::*;
use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Value from the first run, or `None` past its end.
    pub expected: Option<u8>,
    /// Value from the differing run, or `None` past its end.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

fn fmt_byte(byte: Option<u8>) -> String {
    byte.map_or_else(|| "EOF".to_string(), |b| format!("0x{:02X}", b))
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            fmt_byte(self.expected),
            fmt_byte(self.actual),
            self.run_index
        )?;
        if self.offset < seedwave_audio::wav::HEADER_SIZE {
            write!(f, " in header")?;
        } else {
            let sample = (self.offset - seedwave_audio::wav::HEADER_SIZE) / 2;
            write!(f, " in sample {}", sample)?;
        }
        Ok(())
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run generation `runs` times and verify all outputs are identical.
///
/// # Panics
/// Panics if `runs < 2`.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    let diff_info = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        find_first_difference(reference, output.as_ref(), run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff_info,
    }
}

/// Renders every seed once sequentially and once on the rayon pool, and
/// returns the seeds whose outputs disagree.
pub fn verify_parallel_matches_sequential<F>(seeds: &[i32], render: F) -> Vec<i32>
where
    F: Fn(i32) -> Vec<u8> + Sync,
{
    let sequential: Vec<String> = seeds.iter().map(|&s| compute_hash(&render(s))).collect();
    let parallel: Vec<String> = seeds
        .par_iter()
        .map(|&s| compute_hash(&render(s)))
        .collect();

    seeds
        .iter()
        .zip(sequential.iter().zip(parallel.iter()))
        .filter(|(_, (a, b))| a != b)
        .map(|(&seed, _)| seed)
        .collect()
}

/// Find the first byte difference between two slices.
fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let common = expected.len().min(actual.len());
    let offset = expected
        .iter()
        .zip(actual.iter())
        .position(|(e, a)| e != a)
        .or((expected.len() != actual.len()).then_some(common))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

/// True if every hash equals the first.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    hashes.windows(2).all(|pair| pair[0] == pair[1])
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constant_output_is_deterministic() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.output_size, 3);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
    }

    #[test]
    fn test_detects_changed_byte() {
        let calls = Cell::new(0u8);
        let result = verify_determinism(
            || {
                calls.set(calls.get() + 1);
                let mut bytes = vec![0u8; 64];
                bytes[50] = calls.get();
                bytes
            },
            2,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 50);
        assert_eq!(diff.expected, Some(1));
        assert_eq!(diff.actual, Some(2));
        assert!(diff.to_string().contains("sample 3"));
    }

    #[test]
    fn test_detects_length_change() {
        let calls = Cell::new(0usize);
        let result = verify_determinism(
            || {
                calls.set(calls.get() + 1);
                vec![7u8; 4 + calls.get()]
            },
            2,
        );
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 5);
        assert_eq!(diff.expected, None);
        assert_eq!(diff.actual, Some(7));
    }

    #[test]
    fn test_hash_determinism() {
        let a = compute_hash(b"clip");
        assert!(verify_hash_determinism(&[a.clone(), a.clone()]));
        assert!(!verify_hash_determinism(&[a, compute_hash(b"other")]));
        assert!(verify_hash_determinism(&[]));
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_requires_two_runs() {
        verify_determinism(Vec::<u8>::new, 1);
    }
}
