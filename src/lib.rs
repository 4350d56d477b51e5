//! glyph-desmos
//!
//! Converts the outline of an SVG font glyph into one piecewise Desmos
//! expression built from lines and quadratic/cubic Bezier curves.
pub mod core;
pub mod font_source;
pub mod formula;
pub mod geometry;
pub mod logging;
pub mod path;

use formula::{FormulaStyle, GlyphFormula};
use geometry::Outline;
use path::PathError;
use tracing::debug;

/// Convert one glyph's path data into its formula.
///
/// Fails without producing any output if the path data is malformed or uses
/// an unsupported command.
pub fn convert_glyph(
    label: &str,
    path_data: &str,
    style: &FormulaStyle,
) -> Result<GlyphFormula, PathError> {
    let tokens = path::parse_path(path_data)?;
    let outline = Outline::from_tokens(&tokens)?;
    debug!("Glyph '{}': {} segments", label, outline.len());
    Ok(formula::emit(label, &outline, style))
}
