//! SVG serialization for vector-image descriptors.
//!
//! The serializer is a straight mapping from [`Element`] primitives to SVG
//! markup. Identical descriptors serialize to byte-identical documents:
//! attribute order is fixed and numbers use Rust's shortest-roundtrip float
//! formatting, so output is stable across calls and platforms.

use std::fmt::{self, Write};

use crate::element::{Element, LineCap, Path, PathCommand, Stroke};
use crate::vector::{GLOW_STD_DEVIATION, GROUP_OPACITY, VectorImage};

/// Serialize a vector image to an SVG document string.
///
/// The document wraps the primitives in a `size x size` viewport with a
/// Gaussian-blur glow filter merged over the source artwork:
///
/// ```text
/// <svg width=... viewBox="0 0 s s" ...>
///   <defs><filter id=...>blur + merge</filter></defs>
///   <g filter="url(#...)" opacity="0.9">...primitives...</g>
/// </svg>
/// ```
pub fn write_svg(image: &VectorImage) -> String {
    let mut out = String::new();
    render_document(&mut out, image).expect("write to String");
    out
}

fn render_document(out: &mut String, image: &VectorImage) -> fmt::Result {
    let size = image.size();
    let id = image.filter_id();

    writeln!(
        out,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" fill="none" xmlns="http://www.w3.org/2000/svg">"#
    )?;
    writeln!(out, "  <defs>")?;
    writeln!(
        out,
        r#"    <filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">"#
    )?;
    writeln!(
        out,
        r#"      <feGaussianBlur stdDeviation="{GLOW_STD_DEVIATION}" result="coloredBlur"/>"#
    )?;
    writeln!(out, "      <feMerge>")?;
    writeln!(out, r#"        <feMergeNode in="coloredBlur"/>"#)?;
    writeln!(out, r#"        <feMergeNode in="SourceGraphic"/>"#)?;
    writeln!(out, "      </feMerge>")?;
    writeln!(out, "    </filter>")?;
    writeln!(out, "  </defs>")?;
    writeln!(
        out,
        r#"  <g filter="url(#{id})" opacity="{GROUP_OPACITY}">"#
    )?;
    for element in image.elements() {
        render_element(out, element)?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

fn render_element(out: &mut String, element: &Element) -> fmt::Result {
    match element {
        Element::Line { from, to, stroke } => {
            write!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}""#,
                from.x, from.y, to.x, to.y
            )?;
            render_stroke_paint(out, stroke)?;
            render_stroke_extras(out, stroke)?;
            writeln!(out, "/>")
        }
        Element::Dot {
            center,
            radius,
            color,
        } => {
            writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                center.x,
                center.y,
                radius,
                color.to_hex()
            )
        }
        Element::Ring {
            center,
            radius,
            stroke,
        } => {
            write!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}""#,
                center.x, center.y, radius
            )?;
            render_stroke_paint(out, stroke)?;
            write!(out, r#" fill="none""#)?;
            render_stroke_extras(out, stroke)?;
            writeln!(out, "/>")
        }
        Element::Path { path, stroke } => {
            write!(out, r#"    <path d="{}""#, path_data(path))?;
            render_stroke_paint(out, stroke)?;
            write!(out, r#" fill="none""#)?;
            render_stroke_extras(out, stroke)?;
            writeln!(out, "/>")
        }
    }
}

fn render_stroke_paint(out: &mut String, stroke: &Stroke) -> fmt::Result {
    write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color.to_hex(),
        stroke.width
    )
}

/// Optional stroke attributes: cap, dash pattern, opacity.
///
/// Defaults are omitted from the markup (`butt` caps, no dash, opacity 1.0)
/// to keep documents minimal.
fn render_stroke_extras(out: &mut String, stroke: &Stroke) -> fmt::Result {
    if stroke.cap != LineCap::Butt {
        write!(out, r#" stroke-linecap="{}""#, stroke.cap.as_str())?;
    }
    if let Some(dash) = &stroke.dash {
        write!(out, r#" stroke-dasharray="{}""#, dash_data(&dash.pattern))?;
    }
    if stroke.opacity < 1.0 {
        write!(out, r#" opacity="{}""#, stroke.opacity)?;
    }
    Ok(())
}

fn dash_data(pattern: &[f32]) -> String {
    let mut data = String::new();
    for (i, length) in pattern.iter().enumerate() {
        if i > 0 {
            data.push(' ');
        }
        let _ = write!(data, "{length}");
    }
    data
}

fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for (i, command) in path.commands().iter().enumerate() {
        if i > 0 {
            data.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(data, "M {} {}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(data, "L {} {}", p.x, p.y);
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::DashPattern;
    use crate::types::{Color, Point};
    use crate::vector::glow_filter_id;

    fn violet() -> Color {
        Color::from_hex("#8B5CF6").unwrap()
    }

    #[test]
    fn test_document_skeleton() {
        let image = VectorImage::new(48.0, glow_filter_id("icon"), violet(), Vec::new());
        let svg = image.to_svg();

        assert!(svg.starts_with(
            r#"<svg width="48" height="48" viewBox="0 0 48 48" fill="none" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(svg.contains(r#"<filter id="glow-icon" x="-50%" y="-50%" width="200%" height="200%">"#));
        assert!(svg.contains(r#"<feGaussianBlur stdDeviation="2" result="coloredBlur"/>"#));
        assert!(svg.contains(r#"<feMergeNode in="SourceGraphic"/>"#));
        assert!(svg.contains(r#"<g filter="url(#glow-icon)" opacity="0.9">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_dot_markup() {
        let image = VectorImage::new(
            10.0,
            "glow-d",
            violet(),
            vec![Element::Dot {
                center: Point::new(5.0, 5.0),
                radius: 1.5,
                color: violet(),
            }],
        );
        assert!(
            image
                .to_svg()
                .contains(r##"<circle cx="5" cy="5" r="1.5" fill="#8B5CF6"/>"##)
        );
    }

    #[test]
    fn test_line_markup_with_extras() {
        let stroke = Stroke::new(violet(), 0.625)
            .with_cap(LineCap::Round)
            .with_opacity(0.75);
        let image = VectorImage::new(
            20.0,
            "glow-l",
            violet(),
            vec![Element::Line {
                from: Point::new(1.0, 2.0),
                to: Point::new(3.0, 4.0),
                stroke,
            }],
        );
        assert!(image.to_svg().contains(
            r##"<line x1="1" y1="2" x2="3" y2="4" stroke="#8B5CF6" stroke-width="0.625" stroke-linecap="round" opacity="0.75"/>"##
        ));
    }

    #[test]
    fn test_ring_markup_with_dash() {
        let stroke = Stroke::new(violet(), 1.0).with_dash(DashPattern::simple(5.0, 3.0));
        let image = VectorImage::new(
            24.0,
            "glow-r",
            violet(),
            vec![Element::Ring {
                center: Point::new(12.0, 12.0),
                radius: 8.0,
                stroke,
            }],
        );
        assert!(image.to_svg().contains(
            r##"<circle cx="12" cy="12" r="8" stroke="#8B5CF6" stroke-width="1" fill="none" stroke-dasharray="5 3"/>"##
        ));
    }

    #[test]
    fn test_path_markup() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(4.0, 0.0))
            .line_to(Point::new(2.0, 3.0))
            .close();
        let image = VectorImage::new(
            8.0,
            "glow-p",
            violet(),
            vec![Element::Path {
                path,
                stroke: Stroke::new(violet(), 1.0),
            }],
        );
        assert!(image.to_svg().contains(
            r##"<path d="M 0 0 L 4 0 L 2 3 Z" stroke="#8B5CF6" stroke-width="1" fill="none"/>"##
        ));
    }

    #[test]
    fn test_default_extras_are_omitted() {
        let image = VectorImage::new(
            10.0,
            "glow-x",
            violet(),
            vec![Element::Line {
                from: Point::ZERO,
                to: Point::new(1.0, 1.0),
                stroke: Stroke::new(violet(), 1.0),
            }],
        );
        let svg = image.to_svg();
        assert!(!svg.contains("stroke-linecap"));
        assert!(!svg.contains("stroke-dasharray"));
        assert!(svg.contains(r##"<line x1="0" y1="0" x2="1" y2="1" stroke="#8B5CF6" stroke-width="1"/>"##));
    }

    #[test]
    fn test_serialization_is_stable() {
        let image = VectorImage::new(
            16.0,
            "glow-s",
            violet(),
            vec![Element::Dot {
                center: Point::new(8.0, 8.0),
                radius: 2.0,
                color: violet(),
            }],
        );
        assert_eq!(image.to_svg(), image.to_svg());
    }
}
