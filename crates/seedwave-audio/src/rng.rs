//! Deterministic RNG using PCG32.
//!
//! All randomness in a clip flows through one [`SeedSource`] so that the
//! rendered bytes are a pure function of the seed. Nothing in this crate
//! reads any other entropy source.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
///
/// # Arguments
/// * `seed` - 32-bit seed value
///
/// # Returns
/// A seeded PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the per-item seed a catalog uses for item `index`.
///
/// Computes `base * 31 + index` with 32-bit signed wraparound and reduces
/// the result modulo 2^31, which for a two's complement value is the same
/// as clearing the sign bit. The result is always in `[0, 2^31)`.
///
/// # Arguments
/// * `base_seed` - Catalog base seed
/// * `index` - Item index within the catalog
///
/// # Returns
/// The render seed for the item, in `[0, 2^31)`
///
/// # Examples
/// ```
/// use seedwave_audio::rng::derive_item_seed;
///
/// assert_eq!(derive_item_seed(12345, 1), 382_696);
/// ```
pub fn derive_item_seed(base_seed: i32, index: i32) -> i32 {
    base_seed.wrapping_mul(31).wrapping_add(index) & i32::MAX
}

/// Per-clip source of deterministic draws.
///
/// Same seed and same call sequence always yield the same values. Bounds
/// are validated by the caller.
#[derive(Debug, Clone)]
pub struct SeedSource {
    seed: i32,
    rng: Pcg32,
}

impl SeedSource {
    /// Creates a source for one clip.
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            rng: create_rng(seed as u32),
        }
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Uniform integer in `[lo, hi]`.
    ///
    /// # Arguments
    /// * `lo` - Lower bound (inclusive)
    /// * `hi` - Upper bound (inclusive)
    ///
    /// # Returns
    /// A value in `[lo, hi]`, or `lo` when `hi <= lo`
    pub fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[lo, hi)`. Returns `lo` for an empty range.
    ///
    /// # Arguments
    /// * `lo` - Lower bound (inclusive)
    /// * `hi` - Upper bound (exclusive)
    ///
    /// # Returns
    /// A value in `[lo, hi)`
    pub fn float_in(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    ///
    /// # Arguments
    /// * `p` - Probability of `true`
    ///
    /// # Returns
    /// The outcome of one Bernoulli draw
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Picks one element uniformly.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }
}
