//! Drawable outline segments

use kurbo::{CubicBez, Line, ParamCurve, PathSeg, Point, QuadBez, Vec2};

/// One branch of the piecewise glyph formula
///
/// A line keeps the relative offset it was drawn with, so the emitted literals
/// are exactly the numbers found in the path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line { start: Point, offset: Vec2 },
    Quad(QuadBez),
    Cubic(CubicBez),
}

impl Segment {
    pub fn start(&self) -> Point {
        match self {
            Segment::Line { start, .. } => *start,
            Segment::Quad(quad) => quad.p0,
            Segment::Cubic(cubic) => cubic.p0,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line { start, offset } => *start + *offset,
            Segment::Quad(quad) => quad.p2,
            Segment::Cubic(cubic) => cubic.p3,
        }
    }

    /// Evaluate the segment at local parameter `t` in `[0, 1]`
    pub fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line { start, offset } => *start + t * *offset,
            Segment::Quad(quad) => quad.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    pub fn to_path_seg(&self) -> PathSeg {
        match self {
            Segment::Line { start, offset } => PathSeg::Line(Line::new(*start, *start + *offset)),
            Segment::Quad(quad) => PathSeg::Quad(*quad),
            Segment::Cubic(cubic) => PathSeg::Cubic(*cubic),
        }
    }

    /// True when every coordinate the formula would print is finite
    pub fn is_finite(&self) -> bool {
        match self {
            Segment::Line { start, offset } => {
                start.is_finite() && offset.is_finite() && (*start + *offset).is_finite()
            }
            Segment::Quad(quad) => [quad.p0, quad.p1, quad.p2].into_iter().all(Point::is_finite),
            Segment::Cubic(cubic) => [cubic.p0, cubic.p1, cubic.p2, cubic.p3]
                .into_iter()
                .all(Point::is_finite),
        }
    }

    /// Short name used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Segment::Line { .. } => "line",
            Segment::Quad(_) => "quadratic",
            Segment::Cubic(_) => "cubic",
        }
    }
}
