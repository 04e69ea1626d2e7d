//! Core systems for Horizon Sigil: deterministic string-seeded randomness.
//!
//! Everything in the sigil toolkit that looks random is actually a pure
//! function of a caller-supplied seed string. This crate provides the one
//! source of that determinism, [`SeededRandom`], and the single error type
//! its API can surface, [`SeedError`].
//!
//! # Example
//!
//! ```
//! use horizon_sigil_core::{SeededRandom, SeedError};
//!
//! let mut rng = SeededRandom::new("hero-panel");
//!
//! // Draws are deterministic for a given seed.
//! let weight = rng.range(0.25, 1.0);
//! assert!((0.25..1.0).contains(&weight));
//!
//! // Selecting from an empty set is the only explicit failure.
//! let nothing: [u8; 0] = [];
//! assert_eq!(rng.pick(&nothing), Err(SeedError::EmptyInput));
//! ```

mod error;
mod rng;

pub use error::{SeedError, SeedResult};
pub use rng::SeededRandom;
