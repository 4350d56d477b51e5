//! Segment builder state machine
//!
//! Every token is applied to a small explicit state: the pen position, the
//! previous command, and the last control point of each curve family. The
//! shorthand curves reflect the stored control point only when the previous
//! command belongs to the same family.

use super::segment::Segment;
use crate::path::{Command, MalformedKind, PathError, PathToken};
use kurbo::{CubicBez, Point, QuadBez, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct BuildState {
    /// Current pen position in absolute coordinates
    pub current: Point,
    /// Command of the previously applied token
    pub previous: Option<Command>,
    /// Control point of the last `q`/`t`
    pub quad_control: Point,
    /// Second control point of the last `c`/`s`
    pub cubic_control: Point,
}

impl Default for BuildState {
    fn default() -> Self {
        Self {
            current: Point::ZERO,
            previous: None,
            quad_control: Point::ZERO,
            cubic_control: Point::ZERO,
        }
    }
}

impl BuildState {
    /// Apply one token, returning the segment it draws (moves draw nothing)
    pub fn step(&mut self, token: &PathToken) -> Result<Option<Segment>, PathError> {
        let arity = token.command.arity();
        if token.args.len() != arity {
            return Err(PathError::MalformedCommand {
                command: token.command.letter(),
                offset: token.offset,
                kind: MalformedKind::ArgumentCount {
                    expected: arity,
                    found: token.args.len(),
                },
            });
        }

        let a = &token.args;
        let start = self.current;
        let segment = match token.command {
            Command::Move => {
                self.current = Point::new(a[0], a[1]);
                None
            }
            Command::Line => Some(line(start, Vec2::new(a[0], a[1]))),
            Command::Horizontal => Some(line(start, Vec2::new(a[0], 0.0))),
            Command::Vertical => Some(line(start, Vec2::new(0.0, a[0]))),
            Command::Quad => {
                let control = start + Vec2::new(a[0], a[1]);
                let end = start + Vec2::new(a[2], a[3]);
                self.quad_control = control;
                Some(Segment::Quad(QuadBez::new(start, control, end)))
            }
            Command::SmoothQuad => {
                let control = self.reflected_quad_control();
                let end = start + Vec2::new(a[0], a[1]);
                self.quad_control = control;
                Some(Segment::Quad(QuadBez::new(start, control, end)))
            }
            Command::Cubic => {
                let control1 = start + Vec2::new(a[0], a[1]);
                let control2 = start + Vec2::new(a[2], a[3]);
                let end = start + Vec2::new(a[4], a[5]);
                self.cubic_control = control2;
                Some(Segment::Cubic(CubicBez::new(start, control1, control2, end)))
            }
            Command::SmoothCubic => {
                let control1 = self.reflected_cubic_control();
                let control2 = start + Vec2::new(a[0], a[1]);
                let end = start + Vec2::new(a[2], a[3]);
                self.cubic_control = control2;
                Some(Segment::Cubic(CubicBez::new(start, control1, control2, end)))
            }
            Command::Close => {
                return Err(PathError::MalformedCommand {
                    command: 'z',
                    offset: token.offset,
                    kind: MalformedKind::UnnormalizedClose,
                });
            }
        };

        if let Some(segment) = &segment {
            if !segment.is_finite() {
                return Err(PathError::MalformedCommand {
                    command: token.command.letter(),
                    offset: token.offset,
                    kind: MalformedKind::CoordinateOverflow,
                });
            }
            self.current = segment.end();
        }
        self.previous = Some(token.command);
        Ok(segment)
    }

    /// Control point implied by a `t` at the current position
    pub fn reflected_quad_control(&self) -> Point {
        match self.previous {
            Some(command) if command.is_quadratic() => reflect(self.quad_control, self.current),
            _ => self.current,
        }
    }

    /// First control point implied by an `s` at the current position
    pub fn reflected_cubic_control(&self) -> Point {
        match self.previous {
            Some(command) if command.is_cubic() => reflect(self.cubic_control, self.current),
            _ => self.current,
        }
    }
}

fn line(start: Point, offset: Vec2) -> Segment {
    Segment::Line { start, offset }
}

/// `2 * about - point`
fn reflect(point: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - point.x, 2.0 * about.y - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(letter: char, args: &[f64]) -> PathToken {
        PathToken::new(Command::from_letter(letter).unwrap(), args.to_vec(), 0)
    }

    #[test]
    fn move_sets_position_without_segment() {
        let mut state = BuildState::default();
        let segment = state.step(&token('M', &[10.0, 20.0])).unwrap();
        assert!(segment.is_none());
        assert_eq!(state.current, Point::new(10.0, 20.0));
        assert_eq!(state.previous, Some(Command::Move));
    }

    #[test]
    fn lines_advance_the_pen() {
        let mut state = BuildState::default();
        state.step(&token('M', &[1.0, 1.0])).unwrap();

        let h = state.step(&token('h', &[5.0])).unwrap().unwrap();
        assert_eq!(
            h,
            Segment::Line {
                start: Point::new(1.0, 1.0),
                offset: Vec2::new(5.0, 0.0)
            }
        );
        let v = state.step(&token('v', &[-2.0])).unwrap().unwrap();
        assert_eq!(v.start(), Point::new(6.0, 1.0));
        assert_eq!(state.current, Point::new(6.0, -1.0));
    }

    #[test]
    fn smooth_quad_reflects_after_quad() {
        let mut state = BuildState::default();
        state.step(&token('q', &[1.0, 2.0, 2.0, 0.0])).unwrap();
        assert_eq!(state.reflected_quad_control(), Point::new(3.0, -2.0));

        let t = state.step(&token('t', &[2.0, 0.0])).unwrap().unwrap();
        assert_eq!(t, Segment::Quad(QuadBez::new((2.0, 0.0), (3.0, -2.0), (4.0, 0.0))));

        // a second t reflects the control point the first one implied
        let t2 = state.step(&token('t', &[2.0, 0.0])).unwrap().unwrap();
        assert_eq!(t2, Segment::Quad(QuadBez::new((4.0, 0.0), (5.0, 2.0), (6.0, 0.0))));
    }

    #[test]
    fn smooth_quad_without_quad_predecessor_uses_current_point() {
        let mut state = BuildState::default();
        state.step(&token('q', &[1.0, 2.0, 2.0, 0.0])).unwrap();
        state.step(&token('l', &[1.0, 1.0])).unwrap();
        let t = state.step(&token('t', &[2.0, 0.0])).unwrap().unwrap();
        assert_eq!(t, Segment::Quad(QuadBez::new((3.0, 1.0), (3.0, 1.0), (5.0, 1.0))));
    }

    #[test]
    fn smooth_cubic_reflects_second_control() {
        let mut state = BuildState::default();
        state.step(&token('M', &[0.0, 0.0])).unwrap();
        state
            .step(&token('c', &[0.0, 10.0, 20.0, 10.0, 20.0, 0.0]))
            .unwrap();
        let s = state.step(&token('s', &[20.0, -10.0, 20.0, 0.0])).unwrap().unwrap();
        assert_eq!(
            s,
            Segment::Cubic(CubicBez::new(
                (20.0, 0.0),
                (20.0, -10.0),
                (40.0, -10.0),
                (40.0, 0.0)
            ))
        );
    }

    #[test]
    fn smooth_cubic_after_quad_does_not_reflect() {
        let mut state = BuildState::default();
        state.step(&token('q', &[1.0, 1.0, 2.0, 0.0])).unwrap();
        let s = state.step(&token('s', &[1.0, 1.0, 2.0, 0.0])).unwrap().unwrap();
        match s {
            Segment::Cubic(cubic) => assert_eq!(cubic.p1, cubic.p0),
            other => panic!("expected a cubic, got {other:?}"),
        }
    }

    #[test]
    fn unnormalized_close_is_rejected() {
        let mut state = BuildState::default();
        let err = state.step(&token('z', &[])).unwrap_err();
        assert!(matches!(
            err,
            PathError::MalformedCommand {
                kind: MalformedKind::UnnormalizedClose,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_coordinates_are_rejected() {
        let mut state = BuildState::default();
        state.step(&token('M', &[1e308, 0.0])).unwrap();
        let err = state.step(&token('l', &[1e308, 0.0])).unwrap_err();
        assert_eq!(
            err,
            PathError::MalformedCommand {
                command: 'l',
                offset: 0,
                kind: MalformedKind::CoordinateOverflow,
            }
        );
        assert_eq!(state.current, Point::new(1e308, 0.0));

        let mut state = BuildState::default();
        state.step(&token('M', &[0.0, -1e308])).unwrap();
        let err = state.step(&token('c', &[0.0, -1e308, 0.0, 0.0, 1.0, 1.0])).unwrap_err();
        assert_eq!(err.command(), 'c');
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let mut state = BuildState::default();
        let err = state.step(&token('c', &[1.0, 2.0])).unwrap_err();
        assert_eq!(err.command(), 'c');
    }
}
