//! The renderer-agnostic vector-image descriptor.
//!
//! A [`VectorImage`] is the synthesizer's output: a square viewport, a glow
//! filter identifier, a glow tint, and a flat list of drawing primitives.
//! It is constructed fresh on every synthesis call and never mutated or
//! cached by the synthesizer; callers that want caching wrap it in a
//! [`GlyphCache`].
//!
//! The descriptor is deliberately independent of any rendering mechanism.
//! [`to_svg`](VectorImage::to_svg) serializes it for SVG-capable surfaces;
//! native renderers can walk [`elements`](VectorImage::elements) and issue
//! platform drawing calls instead.
//!
//! [`GlyphCache`]: crate::GlyphCache

use crate::element::Element;
use crate::svg;
use crate::types::Color;

/// Standard deviation of the Gaussian-blur glow, in viewport pixels.
pub const GLOW_STD_DEVIATION: f32 = 2.0;

/// Opacity applied uniformly to the glyph group.
pub const GROUP_OPACITY: f32 = 0.9;

/// A complete vector drawing for one glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    size: f32,
    filter_id: String,
    glow_color: Color,
    elements: Vec<Element>,
}

impl VectorImage {
    /// Assemble a vector image from its parts.
    pub fn new(
        size: f32,
        filter_id: impl Into<String>,
        glow_color: Color,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            size,
            filter_id: filter_id.into(),
            glow_color,
            elements,
        }
    }

    /// Viewport edge length in pixels (the viewport is `size x size`).
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The document-unique identifier of the glow filter.
    #[inline]
    pub fn filter_id(&self) -> &str {
        &self.filter_id
    }

    /// The glow tint.
    ///
    /// The SVG serialization blurs the artwork itself, so the tint is
    /// implicit there; renderers that implement glow natively should use
    /// this color.
    #[inline]
    pub fn glow_color(&self) -> Color {
        self.glow_color
    }

    /// The drawing primitives, in paint order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Check if the image has no primitives.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize to an SVG document string.
    pub fn to_svg(&self) -> String {
        svg::write_svg(self)
    }
}

/// Derive a markup-safe glow filter id from a seed string.
///
/// Filter ids end up in `id="..."` and `url(#...)` attributes, so every
/// byte outside `[A-Za-z0-9_-]` is replaced with `-`.
pub fn glow_filter_id(seed: &str) -> String {
    let mut id = String::with_capacity(seed.len() + 5);
    id.push_str("glow-");
    for ch in seed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            id.push(ch);
        } else {
            id.push('-');
        }
    }
    id
}
