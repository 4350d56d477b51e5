//! Batch conversion of several glyphs
//!
//! Glyphs are independent, so they are converted in parallel. Results keep
//! the caller's order, and a failing glyph only affects its own outcome.

use crate::convert_glyph;
use crate::font_source::GlyphEntry;
use crate::formula::{FormulaStyle, GlyphFormula};
use crate::path::PathError;
use rayon::prelude::*;
use serde::Serialize;

/// Result of converting one glyph
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutcome {
    pub label: String,
    pub result: Result<GlyphFormula, PathError>,
}

/// Convert every entry, preserving order
pub fn convert_batch(entries: &[GlyphEntry], style: &FormulaStyle) -> Vec<GlyphOutcome> {
    entries
        .par_iter()
        .map(|entry| GlyphOutcome {
            label: entry.label.clone(),
            result: convert_glyph(&entry.label, &entry.path_data, style),
        })
        .collect()
}

/// Successful formulas, one per line, in order
pub fn join_formulas(outcomes: &[GlyphOutcome]) -> String {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .map(|formula| formula.latex.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializable record of one outcome for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphReport {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// True when the failure is an unsupported feature rather than corrupt input
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unsupported: bool,
}

impl From<&GlyphOutcome> for GlyphReport {
    fn from(outcome: &GlyphOutcome) -> Self {
        match &outcome.result {
            Ok(formula) => Self {
                label: outcome.label.clone(),
                formula: Some(formula.latex.clone()),
                segments: Some(formula.segment_count),
                error: None,
                unsupported: false,
            },
            Err(err) => Self {
                label: outcome.label.clone(),
                formula: None,
                segments: None,
                error: Some(err.to_string()),
                unsupported: err.is_unsupported(),
            },
        }
    }
}
