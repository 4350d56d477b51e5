//! Close-path normalization
//!
//! A `z` either closes a contour that already returns to its start, in which
//! case it draws nothing, or it is replaced by an explicit line back to the
//! start. Running this before segment counting keeps the total correct.

use super::command::Command;
use super::tokenizer::PathToken;
use tracing::trace;

/// Rewrite every `z` as a line back to the sub-path start, or drop it when the
/// pen is already there.
///
/// The displacement is accumulated only from drawing commands and is reset
/// each time a `z` is processed.
pub fn normalize_close_paths(tokens: Vec<PathToken>) -> Vec<PathToken> {
    let mut normalized = Vec::with_capacity(tokens.len());
    let (mut dx, mut dy) = (0.0_f64, 0.0_f64);

    for token in tokens {
        match token.command {
            Command::Close => {
                if dx == 0.0 && dy == 0.0 {
                    trace!("Dropping close-path at byte {}: contour already closed", token.offset);
                    continue;
                }
                trace!(
                    "Rewriting close-path at byte {} as line ({}, {})",
                    token.offset,
                    -dx,
                    -dy
                );
                normalized.push(PathToken::new(
                    Command::Line,
                    vec![0.0 - dx, 0.0 - dy],
                    token.offset,
                ));
                dx = 0.0;
                dy = 0.0;
            }
            command => {
                if command.is_drawing() {
                    let (x, y) = token.displacement();
                    dx += x;
                    dy += y;
                }
                normalized.push(token);
            }
        }
    }

    normalized
}
