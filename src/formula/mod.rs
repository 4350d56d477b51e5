//! Desmos formula emitter
//!
//! Formats an outline as a single piecewise function of an origin `P`, the
//! curve parameter `t` and a scale factor. Segment `k` of `N` is active while
//! `t < k/N` and is drawn with local parameter `N*t - (k - 1)`; the last
//! segment has no condition and covers the rest of the domain.

pub mod style;

pub use style::{FormulaStyle, DEFAULT_NORMALIZATION};

use crate::geometry::{Outline, Segment, Threshold};
use kurbo::{Point, Vec2};
use serde::Serialize;
use tracing::warn;

/// The emitted expression for one glyph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphFormula {
    pub label: String,
    pub segment_count: usize,
    pub latex: String,
}

impl std::fmt::Display for GlyphFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.latex)
    }
}

/// Format the outline of the glyph labelled `label`
pub fn emit(label: &str, outline: &Outline, style: &FormulaStyle) -> GlyphFormula {
    let total = outline.len();
    if total == 0 {
        warn!("Glyph '{}' has no drawable segments", label);
    }

    let mut latex = format!(
        r"g_{{lyph{}}}\left(P,\ t,\ s_{{cale}}\right)=P+\frac{{s_{{cale}}}}{{{}}}\left\{{",
        escape_label(label),
        format_number(style.normalization)
    );

    for (index, segment) in outline.segments().iter().enumerate() {
        let count = index + 1;
        if count != 1 {
            latex.push_str(r",\ ");
        }
        if count != total {
            let threshold = Threshold::new(count, total);
            latex.push_str(&format!(
                r"t<\frac{{{}}}{{{}}}: ",
                threshold.numerator, threshold.denominator
            ));
        }
        push_segment(&mut latex, segment, count, total, style);
    }

    latex.push_str(r"\right\}");

    GlyphFormula {
        label: label.to_string(),
        segment_count: total,
        latex,
    }
}

fn push_segment(out: &mut String, segment: &Segment, count: usize, total: usize, style: &FormulaStyle) {
    match segment {
        Segment::Line { start, offset } => {
            out.push_str(&format_point(*start));
            out.push('+');
            if count == 1 {
                out.push_str(&format!("{total}t"));
            } else {
                out.push_str(&format!(r"\left({}t-{}\right)", total, count - 1));
            }
            out.push_str(&format_vec(*offset));
        }
        Segment::Quad(quad) => {
            push_call(out, &style.quadratic_fn, &[quad.p0, quad.p1, quad.p2], count, total);
        }
        Segment::Cubic(cubic) => {
            push_call(
                out,
                &style.cubic_fn,
                &[cubic.p0, cubic.p1, cubic.p2, cubic.p3],
                count,
                total,
            );
        }
    }
}

fn push_call(out: &mut String, name: &str, points: &[Point], count: usize, total: usize) {
    out.push_str(name);
    out.push_str(r"\left(");
    for point in points {
        out.push_str(&format_point(*point));
        out.push_str(r",\ ");
    }
    out.push_str(&format!("{total}t"));
    if count != 1 {
        out.push_str(&format!("-{}", count - 1));
    }
    out.push_str(r"\right)");
}

fn format_point(point: Point) -> String {
    format!(
        r"\left({},\ {}\right)",
        format_number(point.x),
        format_number(point.y)
    )
}

fn format_vec(vec: Vec2) -> String {
    format_point(vec.to_point())
}

/// Plain decimal literal: shortest round-trip digits, no exponent, no `-0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Escape characters that would unbalance or break the LaTeX subscript
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '{' | '}' | '_' | '%' | '#' | '&' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\\' => escaped.push_str(r"\backslash "),
            '^' => escaped.push_str(r"\hat{}"),
            '~' => escaped.push_str(r"\sim "),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;

    fn formula(label: &str, data: &str) -> GlyphFormula {
        let outline = Outline::from_tokens(&parse_path(data).unwrap()).unwrap();
        emit(label, &outline, &FormulaStyle::default())
    }

    #[test]
    fn single_line_has_no_threshold() {
        let formula = formula("I", "M10 20l3.5 -7");
        assert_eq!(
            formula.latex,
            r"g_{lyphI}\left(P,\ t,\ s_{cale}\right)=P+\frac{s_{cale}}{1500}\left\{\left(10,\ 20\right)+1t\left(3.5,\ -7\right)\right\}"
        );
        assert_eq!(formula.segment_count, 1);
        assert_eq!(formula.to_string(), formula.latex);
    }

    #[test]
    fn square_thresholds_are_reduced() {
        let formula = formula("o", "M0 0l10 0v10h-10z");
        assert_eq!(
            formula.latex,
            concat!(
                r"g_{lypho}\left(P,\ t,\ s_{cale}\right)=P+\frac{s_{cale}}{1500}\left\{",
                r"t<\frac{1}{4}: \left(0,\ 0\right)+4t\left(10,\ 0\right),\ ",
                r"t<\frac{1}{2}: \left(10,\ 0\right)+\left(4t-1\right)\left(0,\ 10\right),\ ",
                r"t<\frac{3}{4}: \left(10,\ 10\right)+\left(4t-2\right)\left(-10,\ 0\right),\ ",
                r"\left(0,\ 10\right)+\left(4t-3\right)\left(0,\ -10\right)",
                r"\right\}"
            )
        );
    }

    #[test]
    fn curves_call_helper_functions() {
        let formula = formula("c", "M0 0q5 10 10 0c1 2 3 4 5 6");
        assert_eq!(
            formula.latex,
            concat!(
                r"g_{lyphc}\left(P,\ t,\ s_{cale}\right)=P+\frac{s_{cale}}{1500}\left\{",
                r"t<\frac{1}{2}: b_{ezier2}\left(\left(0,\ 0\right),\ \left(5,\ 10\right),\ \left(10,\ 0\right),\ 2t\right),\ ",
                r"b_{ezier3}\left(\left(10,\ 0\right),\ \left(11,\ 2\right),\ \left(13,\ 4\right),\ \left(15,\ 6\right),\ 2t-1\right)",
                r"\right\}"
            )
        );
    }

    #[test]
    fn style_changes_names_and_normalization() {
        let outline = Outline::from_tokens(&parse_path("M0 0t1 1").unwrap()).unwrap();
        let style = FormulaStyle {
            normalization: 1000.0,
            quadratic_fn: "Q".to_string(),
            cubic_fn: "C".to_string(),
        };
        let formula = emit("a", &outline, &style);
        assert!(formula.latex.contains(r"\frac{s_{cale}}{1000}"));
        assert!(formula.latex.contains(r"Q\left(\left(0,\ 0\right),\ \left(0,\ 0\right),\ \left(1,\ 1\right),\ 1t\right)"));
    }

    #[test]
    fn empty_outline_has_empty_body() {
        let formula = formula("x", "M0 0");
        assert_eq!(formula.segment_count, 0);
        assert!(formula.latex.ends_with(r"\left\{\right\}"));
    }

    #[test]
    fn numbers_are_plain_decimals() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(-2.5e-7), "-0.00000025");
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_label("a"), "a");
        assert_eq!(escape_label("{"), r"\{");
        assert_eq!(escape_label("&"), r"\&");
        assert_eq!(escape_label("é"), "é");
    }
}
