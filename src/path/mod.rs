//! Path-data parsing
//!
//! Turns the `d` attribute of a glyph into a validated token list with
//! close-path commands already normalized.

pub mod close;
pub mod command;
pub mod error;
pub mod tokenizer;

pub use close::normalize_close_paths;
pub use command::Command;
pub use error::{MalformedKind, PathError};
pub use tokenizer::{next_command, tokenize, PathToken};

/// Tokenize path data and normalize its close-path commands
pub fn parse_path(data: &str) -> Result<Vec<PathToken>, PathError> {
    Ok(normalize_close_paths(tokenize(data)?))
}
