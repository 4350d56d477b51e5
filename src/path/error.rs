//! Path-data errors
//!
//! Both error kinds are fatal for the glyph being converted. A partial
//! formula is never produced.

use thiserror::Error;

/// Why a command in the path data could not be read
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedKind {
    /// A letter that is not part of any path command alphabet
    UnknownLetter,
    /// Text before the first command
    StrayText(String),
    /// An argument that does not parse as a real number
    InvalidNumber(String),
    /// Wrong number of arguments for the command's arity
    ArgumentCount { expected: usize, found: usize },
    /// A close-path token reached the segment builder without being normalized
    UnnormalizedClose,
    /// Accumulated offsets left the range of finite coordinates
    CoordinateOverflow,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::UnknownLetter => write!(f, "not a path command"),
            MalformedKind::StrayText(text) => write!(f, "unexpected text '{text}'"),
            MalformedKind::InvalidNumber(text) => write!(f, "'{text}' is not a number"),
            MalformedKind::ArgumentCount { expected: 0, found } => {
                write!(f, "takes no arguments, found {found}")
            }
            MalformedKind::ArgumentCount { expected, found } => {
                write!(f, "expected a multiple of {expected} arguments, found {found}")
            }
            MalformedKind::UnnormalizedClose => {
                write!(f, "close-path was not normalized before building segments")
            }
            MalformedKind::CoordinateOverflow => {
                write!(f, "coordinates overflow to infinity")
            }
        }
    }
}

/// Errors raised while tokenizing or building a glyph outline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The input is corrupt: unknown letters, bad numbers, wrong arity
    #[error("malformed command '{command}' at byte {offset}: {kind}")]
    MalformedCommand {
        command: char,
        offset: usize,
        kind: MalformedKind,
    },

    /// A real path command that this converter does not handle
    #[error("unsupported path command '{command}' at byte {offset} (only M, l, h, v, q, t, c, s and z are supported)")]
    UnsupportedCommand { command: char, offset: usize },
}

impl PathError {
    /// The offending command character
    pub fn command(&self) -> char {
        match self {
            PathError::MalformedCommand { command, .. } => *command,
            PathError::UnsupportedCommand { command, .. } => *command,
        }
    }

    /// True when the input uses a feature this converter does not support,
    /// as opposed to being corrupt
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PathError::UnsupportedCommand { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        let err = PathError::MalformedCommand {
            command: 'l',
            offset: 4,
            kind: MalformedKind::InvalidNumber("1x".to_string()),
        };
        assert_eq!(err.to_string(), "malformed command 'l' at byte 4: '1x' is not a number");
        assert_eq!(err.command(), 'l');
        assert!(!err.is_unsupported());

        let err = PathError::UnsupportedCommand { command: 'A', offset: 0 };
        assert!(err.to_string().starts_with("unsupported path command 'A'"));
        assert!(err.is_unsupported());
    }
}
