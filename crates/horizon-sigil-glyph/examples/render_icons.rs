//! Render a handful of chapter glyphs to stdout.
//!
//! Run with:
//! ```
//! cargo run --package horizon-sigil-glyph --example render_icons
//! ```

use horizon_sigil_glyph::{Color, GlyphArchetype, GlyphConfig, SeededRandom, generate};

fn main() {
    tracing_subscriber::fmt::init();

    let config = GlyphConfig::default()
        .with_size(20.0)
        .with_stroke_width(0.625)
        .with_color(Color::from_hex("#A78BFA").expect("valid hex color"));

    for chapter in 0..8 {
        let seed = format!("chapter-{chapter}");
        let archetype = GlyphArchetype::sample(&mut SeededRandom::new(&seed));
        let image = generate(&seed, &config);

        println!("<!-- {seed}: {archetype}, {} elements -->", image.elements().len());
        println!("{}", image.to_svg());
    }
}
