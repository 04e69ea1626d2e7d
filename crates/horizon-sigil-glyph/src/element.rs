//! Drawing primitives that make up a glyph.
//!
//! A [`VectorImage`] is a flat list of [`Element`]s: stroked lines and
//! rings, filled dots, and closed polygonal paths. The set is deliberately
//! small; every archetype generator composes its output from these four
//! shapes.
//!
//! [`VectorImage`]: crate::VectorImage

use crate::types::{Color, Point};

/// Stroke style options.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Line cap style.
    pub cap: LineCap,
    /// Dash pattern (lengths of dashes and gaps).
    pub dash: Option<DashPattern>,
    /// Stroke opacity (0.0 to 1.0).
    pub opacity: f32,
}

impl Stroke {
    /// Create a new solid stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            dash: None,
            opacity: 1.0,
        }
    }

    /// Set the line cap style.
    #[inline]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set a dash pattern.
    #[inline]
    pub fn with_dash(mut self, pattern: DashPattern) -> Self {
        self.dash = Some(pattern);
        self
    }

    /// Set the stroke opacity.
    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap at the exact endpoint.
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint.
    Round,
    /// Square cap extending past the endpoint.
    Square,
}

impl LineCap {
    /// The SVG `stroke-linecap` keyword for this cap.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Dash pattern for stroked outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    /// Alternating lengths of dashes and gaps.
    pub pattern: Vec<f32>,
}

impl DashPattern {
    /// Create a dash pattern from alternating dash/gap lengths.
    #[inline]
    pub fn new(pattern: Vec<f32>) -> Self {
        Self { pattern }
    }

    /// Create a simple dash pattern with one dash and one gap length.
    #[inline]
    pub fn simple(dash_length: f32, gap_length: f32) -> Self {
        Self {
            pattern: vec![dash_length, gap_length],
        }
    }
}

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Close the current subpath.
    Close,
}

/// A polygonal path built from move/line/close commands.
///
/// # Example
///
/// ```
/// use horizon_sigil_glyph::{Path, Point};
///
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 0.0))
///     .line_to(Point::new(10.0, 0.0))
///     .line_to(Point::new(5.0, 8.0))
///     .close();
///
/// assert_eq!(path.commands().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A single drawing primitive of a glyph.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A stroked line segment.
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// A filled circle.
    Dot {
        center: Point,
        radius: f32,
        color: Color,
    },
    /// A stroked, unfilled circle.
    Ring {
        center: Point,
        radius: f32,
        stroke: Stroke,
    },
    /// A stroked, unfilled polygonal outline.
    Path { path: Path, stroke: Stroke },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_builder() {
        let stroke = Stroke::new(Color::WHITE, 2.0)
            .with_cap(LineCap::Round)
            .with_opacity(0.4);

        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.opacity, 0.4);
        assert!(stroke.dash.is_none());
    }

    #[test]
    fn test_stroke_defaults() {
        let stroke = Stroke::new(Color::BLACK, 1.5);
        assert_eq!(stroke.cap, LineCap::Butt);
        assert_eq!(stroke.opacity, 1.0);
    }

    #[test]
    fn test_dash_pattern_simple() {
        let dash = DashPattern::simple(5.0, 3.0);
        assert_eq!(dash.pattern, vec![5.0, 3.0]);
    }

    #[test]
    fn test_line_cap_keywords() {
        assert_eq!(LineCap::Butt.as_str(), "butt");
        assert_eq!(LineCap::Round.as_str(), "round");
        assert_eq!(LineCap::Square.as_str(), "square");
    }

    #[test]
    fn test_path_commands() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.move_to(Point::ZERO)
            .line_to(Point::new(4.0, 0.0))
            .line_to(Point::new(4.0, 4.0))
            .close();

        assert!(!path.is_empty());
        assert_eq!(path.commands().len(), 4);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands().last(), Some(PathCommand::Close)));
    }
}
