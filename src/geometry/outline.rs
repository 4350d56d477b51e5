//! Glyph outline as an ordered list of segments
//!
//! Building is split in two passes: the drawing commands are counted first,
//! then each token is turned into absolute geometry. The count fixes the
//! threshold of every branch before any of them is formatted.

use super::build::BuildState;
use super::segment::Segment;
use crate::path::{PathError, PathToken};
use kurbo::{BezPath, Point};
use tracing::trace;

/// Number of segments the tokens will produce
pub fn count_segments(tokens: &[PathToken]) -> usize {
    tokens.iter().filter(|token| token.command.is_drawing()).count()
}

/// The drawable segments of one glyph, in path order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    /// Build the outline from normalized tokens
    pub fn from_tokens(tokens: &[PathToken]) -> Result<Self, PathError> {
        let total = count_segments(tokens);
        let mut state = BuildState::default();
        let mut segments = Vec::with_capacity(total);

        for token in tokens {
            if let Some(segment) = state.step(token)? {
                trace!(
                    "Segment {}/{}: {} from {:?} to {:?}",
                    segments.len() + 1,
                    total,
                    segment.kind_name(),
                    segment.start(),
                    segment.end()
                );
                segments.push(segment);
            }
        }

        debug_assert_eq!(segments.len(), total);
        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Evaluate the piecewise function at `t` in `[0, 1]` the way the emitted
    /// formula does: branch `k` is active while `t < k/N`, with local
    /// parameter `N*t - (k - 1)`.
    pub fn eval(&self, t: f64) -> Option<Point> {
        let total = self.segments.len();
        if total == 0 {
            return None;
        }

        let t = t.clamp(0.0, 1.0);
        let scaled = total as f64 * t;
        let index = (1..total)
            .find(|&count| t < count as f64 / total as f64)
            .unwrap_or(total)
            - 1;

        Some(self.segments[index].eval(scaled - index as f64))
    }

    /// The outline as a kurbo path, starting a new sub-path wherever a
    /// segment does not continue from the previous one
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut last: Option<Point> = None;

        for segment in &self.segments {
            if last != Some(segment.start()) {
                path.move_to(segment.start());
            }
            match segment {
                Segment::Line { .. } => path.line_to(segment.end()),
                Segment::Quad(quad) => path.quad_to(quad.p1, quad.p2),
                Segment::Cubic(cubic) => path.curve_to(cubic.p1, cubic.p2, cubic.p3),
            }
            last = Some(segment.end());
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_path;
    use kurbo::{PathEl, Vec2};

    fn outline(data: &str) -> Outline {
        Outline::from_tokens(&parse_path(data).unwrap()).unwrap()
    }

    #[test]
    fn square_has_four_segments() {
        let tokens = parse_path("M0 0l10 0v10h-10z").unwrap();
        assert_eq!(count_segments(&tokens), 4);

        let outline = Outline::from_tokens(&tokens).unwrap();
        assert_eq!(outline.len(), 4);
        assert_eq!(
            outline.segments()[3],
            Segment::Line {
                start: Point::new(0.0, 10.0),
                offset: Vec2::new(0.0, -10.0)
            }
        );
        assert_eq!(outline.segments()[3].end(), Point::ZERO);
    }

    #[test]
    fn moves_are_not_counted() {
        let tokens = parse_path("M0 0M5 5l1 1").unwrap();
        assert_eq!(count_segments(&tokens), 1);
        assert_eq!(outline("M0 0M5 5l1 1").segments()[0].start(), Point::new(5.0, 5.0));
    }

    #[test]
    fn segments_are_contiguous() {
        let outline = outline("M100 200c10 0 20 10 20 20s-10 20 -20 20q-10 0 -10 -10t5 -5h3v-4l-2 -1z");
        for pair in outline.segments().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        assert_eq!(outline.segments().last().unwrap().end(), Point::new(100.0, 200.0));
    }

    #[test]
    fn eval_follows_branch_thresholds() {
        let outline = outline("M0 0l10 0v10h-10z");
        assert_eq!(outline.eval(0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(outline.eval(0.125), Some(Point::new(5.0, 0.0)));
        assert_eq!(outline.eval(0.25), Some(Point::new(10.0, 0.0)));
        assert_eq!(outline.eval(0.5), Some(Point::new(10.0, 10.0)));
        assert_eq!(outline.eval(0.875), Some(Point::new(0.0, 5.0)));
        assert_eq!(outline.eval(1.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(Outline::default().eval(0.5), None);
    }

    #[test]
    fn bezpath_restarts_on_moves() {
        let outline = outline("M0 0l1 0M5 5q1 1 2 0");
        let elements: Vec<PathEl> = outline.to_bezpath().elements().to_vec();
        assert_eq!(
            elements,
            vec![
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(1.0, 0.0)),
                PathEl::MoveTo(Point::new(5.0, 5.0)),
                PathEl::QuadTo(Point::new(6.0, 6.0), Point::new(7.0, 5.0)),
            ]
        );
    }
}
