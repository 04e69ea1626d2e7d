//! Deterministic pseudo-randomness keyed by a string seed.
//!
//! This module provides [`SeededRandom`], a small linear congruential
//! generator whose state is derived from an arbitrary string. The same seed
//! always reproduces the same draw sequence, which makes it suitable for
//! procedural content that must be stable across sessions and platforms
//! (icons, decorative geometry, placeholder art).
//!
//! # Example
//!
//! ```
//! use horizon_sigil_core::SeededRandom;
//!
//! let mut rng = SeededRandom::new("chapter-1");
//! let mut again = SeededRandom::new("chapter-1");
//!
//! // Identical seeds produce identical sequences.
//! assert_eq!(rng.next(), again.next());
//! assert_eq!(rng.int(0, 10), again.int(0, 10));
//! ```
//!
//! # Determinism
//!
//! All state transitions use exact unsigned 32-bit wraparound arithmetic.
//! There is no platform-dependent floating-point step in the recurrence, so
//! the output sequence is bit-for-bit identical everywhere.
//!
//! This generator is **not** cryptographic.

use tracing::trace;

use crate::error::{SeedError, SeedResult};

/// Multiplier of the 32-bit linear congruential recurrence
/// (Numerical Recipes parameterization).
const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment of the 32-bit linear congruential recurrence.
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a float, the modulus of the recurrence.
const STATE_SPACE: f64 = 4_294_967_296.0;

/// A deterministic pseudo-random generator keyed by a string seed.
///
/// The generator holds a single `u32` state and mutates it in place on every
/// draw. Each consumer is expected to construct its own instance; sharing one
/// generator across independent call sites makes the draw sequence depend on
/// call ordering and defeats reproducibility.
///
/// # Example
///
/// ```
/// use horizon_sigil_core::SeededRandom;
///
/// let mut rng = SeededRandom::new("node-7");
/// let sides = rng.int(5, 8);          // inclusive on both ends
/// assert!((5..=8).contains(&sides));
///
/// let jitter = rng.range(-0.1, 0.1);  // half-open
/// assert!((-0.1..0.1).contains(&jitter));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a generator from a string seed.
    ///
    /// Never fails; any string is a valid seed. The empty string hashes
    /// to state 0.
    pub fn new(seed: &str) -> Self {
        let state = Self::hash_seed(seed);
        trace!(target: "horizon_sigil_core::rng", seed, state, "seeded generator");
        Self { state }
    }

    /// Hash a seed string to the generator's initial state.
    ///
    /// The hash is an order-dependent multiply-shift-accumulate over the
    /// seed's UTF-16 code units, folded in wrapping 32-bit signed
    /// arithmetic, then reduced to its unsigned magnitude. It is exposed so
    /// callers can derive stable identifiers from seeds without constructing
    /// a generator.
    pub fn hash_seed(seed: &str) -> u32 {
        let mut hash: i32 = 0;
        for unit in seed.encode_utf16() {
            hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
        }
        hash.unsigned_abs()
    }

    /// The current internal state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return a float in `[0, 1)`.
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.state) / STATE_SPACE
    }

    /// A float in `[min, max)`.
    #[inline]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// An integer in `[min, max]`, inclusive on **both** ends.
    ///
    /// The inclusive upper bound is deliberately asymmetric with [`range`]:
    /// callers rely on `int(0, len - 1)` covering the last index.
    ///
    /// [`range`]: Self::range
    #[inline]
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.range(min as f64, max as f64 + 1.0).floor() as i64
    }

    /// A uniformly selected element of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptyInput`] if `items` is empty. Indexing into
    /// an empty slice has no meaningful answer, so the condition is surfaced
    /// explicitly instead of panicking.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> SeedResult<&'a T> {
        if items.is_empty() {
            return Err(SeedError::EmptyInput);
        }
        let index = self.int(0, items.len() as i64 - 1) as usize;
        Ok(&items[index])
    }

    /// `true` with the given probability; a fair coin is `chance(0.5)`.
    #[inline]
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next() < probability
    }
}
