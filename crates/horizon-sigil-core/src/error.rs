//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur when drawing from a [`SeededRandom`].
///
/// [`SeededRandom`]: crate::SeededRandom
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// A uniform selection was requested from an empty slice.
    #[error("empty input: cannot pick from an empty slice")]
    EmptyInput,
}

/// Result type for seeded random operations.
pub type SeedResult<T> = Result<T, SeedError>;
