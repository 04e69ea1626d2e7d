//! Display configuration for glyph synthesis.

use crate::types::Color;

/// Display parameters for a synthesized glyph.
///
/// `GlyphConfig` is an immutable value object: construct one, hand it to
/// [`generate`], and reuse it across as many seeds as needed. The defaults
/// mirror the toolkit's standard icon treatment (48px, 1.5px stroke, violet).
///
/// Zero or negative sizes are accepted and produce degenerate (invisible)
/// geometry rather than an error; decorative output must never block
/// rendering.
///
/// # Example
///
/// ```
/// use horizon_sigil_glyph::{Color, GlyphConfig};
///
/// let config = GlyphConfig::default()
///     .with_size(20.0)
///     .with_stroke_width(0.625)
///     .with_color(Color::from_hex("#A78BFA").unwrap());
///
/// assert_eq!(config.size, 20.0);
/// ```
///
/// [`generate`]: crate::generate
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphConfig {
    /// Viewport edge length in pixels.
    pub size: f32,
    /// Base stroke width in pixels.
    pub stroke_width: f32,
    /// Primary stroke and fill color.
    pub color: Color,
    /// Optional glow tint; defaults to the primary color when `None`.
    pub glow_color: Option<Color>,
}

impl GlyphConfig {
    /// The toolkit's standard glyph violet (`#8B5CF6`).
    pub const DEFAULT_COLOR: Color =
        Color::new(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 1.0);

    /// Create a config for a given display size, deriving the stroke width.
    ///
    /// The stroke scales with the icon: `stroke_width = size / 32`, the
    /// same rule the presentation layer applies when it only knows the
    /// target size.
    pub fn for_size(size: f32) -> Self {
        Self {
            size,
            stroke_width: size / 32.0,
            ..Self::default()
        }
    }

    /// Set the viewport size in pixels.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the base stroke width in pixels.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Set the primary color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set a glow tint distinct from the primary color.
    #[must_use]
    pub fn with_glow_color(mut self, glow_color: Color) -> Self {
        self.glow_color = Some(glow_color);
        self
    }

    /// The effective glow tint: the explicit glow color, or the primary.
    #[inline]
    pub fn effective_glow_color(&self) -> Color {
        self.glow_color.unwrap_or(self.color)
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            size: 48.0,
            stroke_width: 1.5,
            color: Self::DEFAULT_COLOR,
            glow_color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlyphConfig::default();
        assert_eq!(config.size, 48.0);
        assert_eq!(config.stroke_width, 1.5);
        assert_eq!(config.color.to_hex(), "#8B5CF6");
        assert!(config.glow_color.is_none());
    }

    #[test]
    fn test_for_size_derives_stroke() {
        let config = GlyphConfig::for_size(48.0);
        assert_eq!(config.stroke_width, 1.5);

        let small = GlyphConfig::for_size(20.0);
        assert_eq!(small.stroke_width, 0.625);
    }

    #[test]
    fn test_builder_chain() {
        let teal = Color::from_rgb8(20, 184, 166);
        let config = GlyphConfig::default()
            .with_size(64.0)
            .with_stroke_width(2.0)
            .with_color(teal)
            .with_glow_color(Color::WHITE);

        assert_eq!(config.size, 64.0);
        assert_eq!(config.stroke_width, 2.0);
        assert_eq!(config.color, teal);
        assert_eq!(config.effective_glow_color(), Color::WHITE);
    }

    #[test]
    fn test_glow_falls_back_to_primary() {
        let config = GlyphConfig::default();
        assert_eq!(config.effective_glow_color(), config.color);
    }
}
