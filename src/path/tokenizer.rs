//! Path-data tokenizer
//!
//! Commands are not delimited by anything but their own letters, so the
//! tokenizer finds each command by scanning for the next letter and treats
//! everything up to the following letter as that command's arguments.

use super::command::{Command, UNSUPPORTED_LETTERS};
use super::error::{MalformedKind, PathError};
use tracing::trace;

/// One command of the path data with its numeric arguments
#[derive(Debug, Clone, PartialEq)]
pub struct PathToken {
    pub command: Command,
    pub args: Vec<f64>,
    /// Byte offset of the command letter in the raw path data
    pub offset: usize,
}

impl PathToken {
    pub fn new(command: Command, args: Vec<f64>, offset: usize) -> Self {
        Self {
            command,
            args,
            offset,
        }
    }

    /// The relative displacement this token moves the pen by.
    /// Moves and closes contribute nothing.
    pub fn displacement(&self) -> (f64, f64) {
        match self.command {
            Command::Move | Command::Close => (0.0, 0.0),
            Command::Horizontal => (self.arg(0), 0.0),
            Command::Vertical => (0.0, self.arg(0)),
            _ => {
                let n = self.args.len();
                if n < 2 {
                    return (0.0, 0.0);
                }
                (self.args[n - 2], self.args[n - 1])
            }
        }
    }

    fn arg(&self, index: usize) -> f64 {
        self.args.get(index).copied().unwrap_or(0.0)
    }
}

/// Letters that start a command. `e` and `E` are excluded because they
/// belong to exponent notation inside numbers.
fn is_command_char(c: char) -> bool {
    c.is_ascii_alphabetic() && c != 'e' && c != 'E'
}

/// Byte index of the earliest command letter at or after `from`
pub fn next_command(data: &str, from: usize) -> Option<usize> {
    data.get(from..)?.find(is_command_char).map(|index| index + from)
}

/// Split the path data into tokens, validating letters, numbers and arity
pub fn tokenize(data: &str) -> Result<Vec<PathToken>, PathError> {
    let first = next_command(data, 0);

    let leading = &data[..first.unwrap_or(data.len())];
    if let Some(stray) = leading.find(|c: char| !c.is_whitespace()) {
        let text = leading[stray..].trim_end();
        return Err(PathError::MalformedCommand {
            command: text.chars().next().unwrap_or(' '),
            offset: stray,
            kind: MalformedKind::StrayText(text.to_string()),
        });
    }

    let mut tokens = Vec::new();
    let mut next = first;
    while let Some(offset) = next {
        let letter = char::from(data.as_bytes()[offset]);
        let end = next_command(data, offset + 1);
        let span = &data[offset + 1..end.unwrap_or(data.len())];

        let command = Command::from_letter(letter).ok_or_else(|| classify(letter, offset))?;
        let args = parse_arguments(letter, span, offset)?;
        push_tokens(&mut tokens, command, args, offset)?;

        next = end;
    }

    trace!("Tokenized {} path commands", tokens.len());
    Ok(tokens)
}

fn classify(letter: char, offset: usize) -> PathError {
    if UNSUPPORTED_LETTERS.contains(letter) {
        PathError::UnsupportedCommand {
            command: letter,
            offset,
        }
    } else {
        PathError::MalformedCommand {
            command: letter,
            offset,
            kind: MalformedKind::UnknownLetter,
        }
    }
}

/// Arguments are separated by whitespace and/or commas
fn parse_arguments(letter: char, span: &str, offset: usize) -> Result<Vec<f64>, PathError> {
    span.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(PathError::MalformedCommand {
                command: letter,
                offset,
                kind: MalformedKind::InvalidNumber(part.to_string()),
            }),
        })
        .collect()
}

/// Push one token per argument group. Repeated groups are the SVG implicit
/// repetition form; extra pairs after a move are lines.
fn push_tokens(
    tokens: &mut Vec<PathToken>,
    command: Command,
    args: Vec<f64>,
    offset: usize,
) -> Result<(), PathError> {
    let arity = command.arity();
    let malformed = |found: usize| PathError::MalformedCommand {
        command: command.letter(),
        offset,
        kind: MalformedKind::ArgumentCount {
            expected: arity,
            found,
        },
    };

    if arity == 0 {
        if !args.is_empty() {
            return Err(malformed(args.len()));
        }
        tokens.push(PathToken::new(command, args, offset));
        return Ok(());
    }

    if args.is_empty() || args.len() % arity != 0 {
        return Err(malformed(args.len()));
    }

    for (index, group) in args.chunks(arity).enumerate() {
        let command = if command == Command::Move && index > 0 {
            Command::Line
        } else {
            command
        };
        tokens.push(PathToken::new(command, group.to_vec(), offset));
    }
    Ok(())
}
