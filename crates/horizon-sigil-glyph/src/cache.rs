//! Caller-side cache for rendered glyph markup.
//!
//! The synthesizer itself never caches; every call builds a fresh
//! [`VectorImage`]. Call sites that render the same seed at the same size
//! on every frame can put a [`GlyphCache`] in front of [`generate`] to skip
//! repeated synthesis and serialization.
//!
//! # Example
//!
//! ```
//! use horizon_sigil_glyph::{GlyphCache, GlyphConfig};
//!
//! let mut cache = GlyphCache::with_defaults();
//! let config = GlyphConfig::for_size(48.0);
//!
//! let svg = cache.get_or_generate("chapter-1", &config);
//! let again = cache.get_or_generate("chapter-1", &config);
//!
//! assert_eq!(svg, again);
//! assert_eq!(cache.hits(), 1);
//! ```
//!
//! # Thread Safety
//!
//! This cache is NOT thread-safe. For concurrent access, wrap it in a
//! `Mutex`.
//!
//! [`VectorImage`]: crate::VectorImage
//! [`generate`]: crate::generate

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::GlyphConfig;
use crate::synth;

/// Configuration for the glyph cache.
#[derive(Debug, Clone)]
pub struct GlyphCacheConfig {
    /// Maximum number of cached documents.
    /// When exceeded, least recently used entries are evicted.
    /// Default: 256.
    pub max_entries: usize,
}

impl Default for GlyphCacheConfig {
    fn default() -> Self {
        Self { max_entries: 256 }
    }
}

impl GlyphCacheConfig {
    /// Set the maximum number of cached documents.
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }
}

/// Cache key for rendered glyphs.
///
/// Includes the full display configuration since the same seed may be
/// rendered at several sizes or colors. Float fields are keyed by bit
/// pattern so the key can be hashed exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphCacheKey {
    seed: String,
    size: u32,
    stroke_width: u32,
    color: [u32; 4],
    glow_color: Option<[u32; 4]>,
}

impl GlyphCacheKey {
    /// Create a cache key for a seed and configuration.
    pub fn new(seed: &str, config: &GlyphConfig) -> Self {
        Self {
            seed: seed.to_owned(),
            size: config.size.to_bits(),
            stroke_width: config.stroke_width.to_bits(),
            color: color_bits(config.color),
            glow_color: config.glow_color.map(color_bits),
        }
    }
}

fn color_bits(color: crate::types::Color) -> [u32; 4] {
    [
        color.r.to_bits(),
        color.g.to_bits(),
        color.b.to_bits(),
        color.a.to_bits(),
    ]
}

/// An LRU cache of serialized glyph documents.
pub struct GlyphCache {
    config: GlyphCacheConfig,
    entries: HashMap<GlyphCacheKey, String>,
    /// Access order, most recent last.
    order: Vec<GlyphCacheKey>,
    hits: u64,
    misses: u64,
}

impl GlyphCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: GlyphCacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            order: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GlyphCacheConfig::default())
    }

    /// Get the number of cached documents.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the cache hit count.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Get the cache miss count.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Get the cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Check if a key exists (without updating LRU order).
    pub fn contains(&self, key: &GlyphCacheKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Get cached markup, or synthesize, serialize, and cache it.
    ///
    /// This is the primary method for using the cache.
    pub fn get_or_generate(&mut self, seed: &str, config: &GlyphConfig) -> String {
        let key = GlyphCacheKey::new(seed, config);

        if let Some(svg) = self.get(&key) {
            return svg.to_owned();
        }

        let svg = synth::generate(seed, config).to_svg();
        self.insert(key, svg.clone());
        svg
    }

    /// Get cached markup for a key.
    ///
    /// If found, the entry is moved to the back of the eviction order.
    pub fn get(&mut self, key: &GlyphCacheKey) -> Option<&str> {
        if self.entries.contains_key(key) {
            self.hits += 1;
            self.touch(key);
            trace!(target: "horizon_sigil::cache", seed = %key.seed, "glyph cache hit");
            self.entries.get(key).map(String::as_str)
        } else {
            self.misses += 1;
            None
        }
    }

    /// Insert markup for a key, evicting least recently used entries when
    /// the cache is full.
    pub fn insert(&mut self, key: GlyphCacheKey, svg: String) {
        if self.config.max_entries == 0 {
            return;
        }

        if self.entries.insert(key.clone(), svg).is_none() {
            self.order.push(key);
        } else {
            self.touch(&key);
        }

        while self.entries.len() > self.config.max_entries {
            let oldest = self.order.remove(0);
            debug!(target: "horizon_sigil::cache", seed = %oldest.seed, "evicting glyph");
            self.entries.remove(&oldest);
        }
    }

    /// Remove an entry, returning its markup if it existed.
    pub fn remove(&mut self, key: &GlyphCacheKey) -> Option<String> {
        self.order.retain(|k| k != key);
        self.entries.remove(key)
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Reset hit/miss statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Move a key to the back of the eviction order.
    fn touch(&mut self, key: &GlyphCacheKey) {
        if let Some(position) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(position);
            self.order.push(key);
        }
    }
}

impl std::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("entries", &self.entries.len())
            .field("max_entries", &self.config.max_entries)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GlyphConfig {
        GlyphConfig::for_size(24.0)
    }

    #[test]
    fn test_get_or_generate_caches() {
        let mut cache = GlyphCache::with_defaults();
        let first = cache.get_or_generate("icon-1", &config());
        let second = cache.get_or_generate("icon-1", &config());

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_distinct_configs_get_distinct_entries() {
        let mut cache = GlyphCache::with_defaults();
        let small = cache.get_or_generate("icon-1", &GlyphConfig::for_size(16.0));
        let large = cache.get_or_generate("icon-1", &GlyphConfig::for_size(64.0));

        assert_ne!(small, large);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cached_markup_matches_direct_generation() {
        let mut cache = GlyphCache::with_defaults();
        let cached = cache.get_or_generate("icon-7", &config());
        let direct = crate::generate("icon-7", &config()).to_svg();
        assert_eq!(cached, direct);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = GlyphCache::new(GlyphCacheConfig::default().with_max_entries(2));
        cache.get_or_generate("a", &config());
        cache.get_or_generate("b", &config());
        // Touch "a" so "b" becomes the eviction candidate.
        cache.get_or_generate("a", &config());
        cache.get_or_generate("c", &config());

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&GlyphCacheKey::new("a", &config())));
        assert!(!cache.contains(&GlyphCacheKey::new("b", &config())));
        assert!(cache.contains(&GlyphCacheKey::new("c", &config())));
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let mut cache = GlyphCache::new(GlyphCacheConfig::default().with_max_entries(0));
        cache.get_or_generate("a", &config());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = GlyphCache::with_defaults();
        cache.get_or_generate("a", &config());
        cache.get_or_generate("b", &config());

        assert!(cache.remove(&GlyphCacheKey::new("a", &config())).is_some());
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hit_rate() {
        let mut cache = GlyphCache::with_defaults();
        assert_eq!(cache.hit_rate(), 0.0);

        cache.get_or_generate("a", &config());
        cache.get_or_generate("a", &config());
        cache.get_or_generate("a", &config());

        // One miss, two hits.
        assert!((cache.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
    }
}
