//! Glyph synthesis: turning (seed, config) into a vector image.
//!
//! One synthesis call owns one [`SeededRandom`] for its entire duration.
//! The first draw selects the archetype; every archetype generator then
//! consumes further draws from the same generator, so the seed determines
//! both the style and every downstream geometric parameter in one
//! continuous deterministic stream.
//!
//! The draw order inside each generator is part of the output contract:
//! reordering draws changes every glyph. Edit with care.
//!
//! # Example
//!
//! ```
//! use horizon_sigil_glyph::{generate, GlyphConfig};
//!
//! let config = GlyphConfig::for_size(48.0);
//! let image = generate("chapter-1", &config);
//! let again = generate("chapter-1", &config);
//!
//! // Same seed, same config: byte-identical markup.
//! assert_eq!(image.to_svg(), again.to_svg());
//! ```

use std::f64::consts::{FRAC_PI_2, TAU};

use horizon_sigil_core::SeededRandom;
use tracing::debug;

use crate::archetype::GlyphArchetype;
use crate::config::GlyphConfig;
use crate::element::{DashPattern, Element, LineCap, Path, Stroke};
use crate::types::Point;
use crate::vector::{VectorImage, glow_filter_id};

/// Synthesize a glyph for a seed and display configuration.
///
/// Never fails: degenerate configurations (zero or negative size or stroke
/// width) produce degenerate, possibly invisible geometry rather than an
/// error. The call is pure with respect to external state; no caching or
/// I/O happens here.
pub fn generate(seed: &str, config: &GlyphConfig) -> VectorImage {
    let mut rng = SeededRandom::new(seed);
    let archetype = GlyphArchetype::sample(&mut rng);

    let center = f64::from(config.size) / 2.0;
    let radius = f64::from(config.size) / 2.0 - f64::from(config.stroke_width) * 2.0;

    debug!(
        target: "horizon_sigil::synth",
        seed,
        archetype = %archetype,
        size = config.size,
        "synthesizing glyph"
    );

    let mut elements = Vec::new();
    match archetype {
        GlyphArchetype::Hexagon => hexagon_glyph(&mut rng, center, radius, config, &mut elements),
        GlyphArchetype::Circuit => circuit_glyph(&mut rng, center, radius, config, &mut elements),
        GlyphArchetype::Radial => radial_glyph(&mut rng, center, radius, config, &mut elements),
        GlyphArchetype::Orbital => orbital_glyph(&mut rng, center, radius, config, &mut elements),
        GlyphArchetype::Pulse => pulse_glyph(&mut rng, center, radius, config, &mut elements),
    }

    VectorImage::new(
        config.size,
        glow_filter_id(seed),
        config.effective_glow_color(),
        elements,
    )
}

/// The point at `center + (cos a, sin a) * dist`, narrowed for output.
fn polar(center: f64, angle: f64, dist: f64) -> Point {
    Point::new(
        (center + angle.cos() * dist) as f32,
        (center + angle.sin() * dist) as f32,
    )
}

fn center_point(center: f64) -> Point {
    Point::new(center as f32, center as f32)
}

/// Concentric polygons: a 5-8 sided outline, a scaled inner copy at half
/// intensity, and a center dot half the time.
fn hexagon_glyph(
    rng: &mut SeededRandom,
    center: f64,
    radius: f64,
    config: &GlyphConfig,
    out: &mut Vec<Element>,
) {
    let sides = rng.int(5, 8);
    let inner_radius = radius * rng.range(0.3, 0.6);

    let mut outer = Path::new();
    let mut inner = Path::new();
    for i in 0..sides {
        let angle = (i as f64 * TAU) / sides as f64 - FRAC_PI_2;
        let outer_point = polar(center, angle, radius);
        let inner_point = polar(center, angle, inner_radius);
        if i == 0 {
            outer.move_to(outer_point);
            inner.move_to(inner_point);
        } else {
            outer.line_to(outer_point);
            inner.line_to(inner_point);
        }
    }
    outer.close();
    inner.close();

    out.push(Element::Path {
        path: outer,
        stroke: Stroke::new(config.color, config.stroke_width),
    });
    out.push(Element::Path {
        path: inner,
        stroke: Stroke::new(config.color, config.stroke_width * 0.7).with_opacity(0.5),
    });
    if rng.chance(0.5) {
        out.push(Element::Dot {
            center: center_point(center),
            radius: config.stroke_width * 2.0,
            color: config.color,
        });
    }
}

/// Scattered nodes joined by faint lines, then drawn as filled dots.
fn circuit_glyph(
    rng: &mut SeededRandom,
    center: f64,
    radius: f64,
    config: &GlyphConfig,
    out: &mut Vec<Element>,
) {
    let node_count = rng.int(4, 7);
    let mut nodes = Vec::with_capacity(node_count as usize);
    for _ in 0..node_count {
        let angle = rng.range(0.0, TAU);
        let dist = rng.range(radius * 0.3, radius * 0.9);
        nodes.push(polar(center, angle, dist));
    }

    // Connections first so the dots paint over the line ends.
    for (i, node) in nodes.iter().enumerate() {
        let connections = rng.int(1, 2);
        for _ in 0..connections {
            let target = rng.int(0, nodes.len() as i64 - 1) as usize;
            if target != i {
                out.push(Element::Line {
                    from: *node,
                    to: nodes[target],
                    stroke: Stroke::new(config.color, config.stroke_width * 0.5)
                        .with_opacity(0.4),
                });
            }
        }
    }

    for node in &nodes {
        let node_size = rng.range(2.0, 4.0);
        out.push(Element::Dot {
            center: *node,
            radius: node_size as f32,
            color: config.color,
        });
    }
}

/// A center dot with 6-12 rays, each at a jittered angle, some tipped
/// with a dot.
fn radial_glyph(
    rng: &mut SeededRandom,
    center: f64,
    radius: f64,
    config: &GlyphConfig,
    out: &mut Vec<Element>,
) {
    let ray_count = rng.int(6, 12);
    out.push(Element::Dot {
        center: center_point(center),
        radius: (radius * 0.15) as f32,
        color: config.color,
    });

    for i in 0..ray_count {
        let angle = (i as f64 * TAU) / ray_count as f64 + rng.range(-0.1, 0.1);
        let inner_dist = radius * rng.range(0.2, 0.35);
        let outer_dist = radius * rng.range(0.7, 1.0);

        let from = polar(center, angle, inner_dist);
        let to = polar(center, angle, outer_dist);
        let opacity = rng.range(0.5, 1.0);

        out.push(Element::Line {
            from,
            to,
            stroke: Stroke::new(config.color, config.stroke_width)
                .with_cap(LineCap::Round)
                .with_opacity(opacity as f32),
        });

        if rng.chance(0.3) {
            out.push(Element::Dot {
                center: to,
                radius: config.stroke_width,
                color: config.color,
            });
        }
    }
}

/// A center dot inside 2-4 concentric orbits; orbits may be dashed and may
/// carry one satellite dot.
fn orbital_glyph(
    rng: &mut SeededRandom,
    center: f64,
    radius: f64,
    config: &GlyphConfig,
    out: &mut Vec<Element>,
) {
    let orbit_count = rng.int(2, 4);
    out.push(Element::Dot {
        center: center_point(center),
        radius: config.stroke_width * 2.0,
        color: config.color,
    });

    for i in 0..orbit_count {
        let orbit_radius =
            radius * ((i + 1) as f64 / (orbit_count + 1) as f64) * rng.range(0.9, 1.1);

        let mut stroke = Stroke::new(config.color, config.stroke_width * 0.7)
            .with_opacity((0.4 + i as f64 * 0.2) as f32);
        if rng.chance(0.5) {
            let dash = rng.int(5, 15) as f32;
            let gap = rng.int(3, 8) as f32;
            stroke = stroke.with_dash(DashPattern::simple(dash, gap));
        }

        out.push(Element::Ring {
            center: center_point(center),
            radius: orbit_radius as f32,
            stroke,
        });

        if rng.chance(0.7) {
            let dot_angle = rng.range(0.0, TAU);
            out.push(Element::Dot {
                center: polar(center, dot_angle, orbit_radius),
                radius: config.stroke_width * 1.5,
                color: config.color,
            });
        }
    }
}

/// A center dot inside 3-5 waves at fixed radii with linearly fading
/// opacity.
fn pulse_glyph(
    rng: &mut SeededRandom,
    center: f64,
    radius: f64,
    config: &GlyphConfig,
    out: &mut Vec<Element>,
) {
    let wave_count = rng.int(3, 5);
    out.push(Element::Dot {
        center: center_point(center),
        radius: config.stroke_width * 2.5,
        color: config.color,
    });

    for i in 0..wave_count {
        let wave_radius = radius * ((i + 1) as f64 / wave_count as f64);
        let opacity = 1.0 - (i as f64 / wave_count as f64) * 0.7;

        out.push(Element::Ring {
            center: center_point(center),
            radius: wave_radius as f32,
            stroke: Stroke::new(config.color, config.stroke_width)
                .with_opacity(opacity as f32),
        });
    }
}
