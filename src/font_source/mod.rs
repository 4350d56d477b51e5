//! Font source input
//!
//! Glyph labels and path data read from SVG font files. Everything after this
//! point works on one `(label, path data)` pair at a time.

pub mod svg_font;

pub use svg_font::{load_svg_font, parse_svg_font, select_glyphs, GlyphEntry};
