//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG with 64-bit state and 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence. The monitor leans on this for:
//! - Reproducing an exact feed from a seed (debugging)
//! - Tests that assert exact event sequences rather than statistics

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// The generator is injected into everything that needs randomness, so a
/// single seed fully determines the event feed.
///
/// # Example
/// ```
/// use fraud_monitor_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let score = rng.range(60, 100); // [60, 100)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed.
    ///
    /// A zero seed is coerced to 1 (xorshift state must be nonzero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random value in range [min, max).
    ///
    /// # Panics
    /// Panics if min >= max.
    ///
    /// # Example
    /// ```
    /// use fraud_monitor_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let score = rng.range(60, 100);
    /// assert!((60..100).contains(&score));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Pick a uniform index into a collection of the given length.
    ///
    /// # Panics
    /// Panics if len is zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be positive");
        (self.next() % len as u64) as usize
    }

    /// Get the current RNG state (for replay).
    ///
    /// # Example
    /// ```
    /// use fraud_monitor_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.get_state();
    /// let replay = RngManager::new(state);
    /// assert_eq!(replay.get_state(), state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
