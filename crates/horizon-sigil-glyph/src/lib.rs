//! Seeded procedural glyph synthesis for Horizon Sigil.
//!
//! This crate turns a string seed and a display configuration into a small
//! decorative vector icon: one of five archetypes (hexagon, circuit,
//! radial, orbital, pulse) drawn from lines, circles, and polygonal paths
//! inside a square viewport with a Gaussian-blur glow.
//!
//! The same seed always produces the same glyph, so call sites can derive
//! icons from stable identifiers (section names, node ids) without storing
//! anything.
//!
//! # Getting Started
//!
//! ```
//! use horizon_sigil_glyph::{generate, GlyphConfig, Color};
//!
//! let config = GlyphConfig::default()
//!     .with_size(20.0)
//!     .with_stroke_width(0.625)
//!     .with_color(Color::from_hex("#A78BFA").unwrap());
//!
//! let image = generate("chapter-1", &config);
//!
//! // A structured descriptor...
//! assert!(!image.elements().is_empty());
//!
//! // ...or ready-to-embed SVG markup.
//! let svg = image.to_svg();
//! assert!(svg.starts_with("<svg "));
//! ```
//!
//! # Caching
//!
//! Synthesis is cheap but not free; hot call sites can put a [`GlyphCache`]
//! in front of it:
//!
//! ```
//! use horizon_sigil_glyph::{GlyphCache, GlyphConfig};
//!
//! let mut cache = GlyphCache::with_defaults();
//! let svg = cache.get_or_generate("hero-panel", &GlyphConfig::for_size(48.0));
//! # assert!(svg.starts_with("<svg "));
//! ```

mod archetype;
mod cache;
mod config;
mod element;
mod svg;
mod synth;
mod types;
mod vector;

pub use archetype::GlyphArchetype;
pub use cache::{GlyphCache, GlyphCacheConfig, GlyphCacheKey};
pub use config::GlyphConfig;
pub use element::{DashPattern, Element, LineCap, Path, PathCommand, Stroke};
pub use synth::generate;
pub use types::{Color, Point};
pub use vector::{GLOW_STD_DEVIATION, GROUP_OPACITY, VectorImage, glow_filter_id};

// Re-export the random source for callers that seed their own draws.
pub use horizon_sigil_core::{SeedError, SeedResult, SeededRandom};
