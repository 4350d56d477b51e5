//! Path command alphabet
//!
//! The converter understands a fixed subset of SVG path commands: an absolute
//! move, and relative line, curve and close-path commands.

/// Letters of the supported command alphabet
pub const SUPPORTED_LETTERS: &str = "Mlvhqtcsz";

/// SVG path commands that exist but are not handled here
pub const UNSUPPORTED_LETTERS: &str = "mLHVQTCSZAa";

/// A supported path command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `M x y`: absolute move
    Move,
    /// `l dx dy`
    Line,
    /// `h dx`
    Horizontal,
    /// `v dy`
    Vertical,
    /// `q dx1 dy1 dx dy`
    Quad,
    /// `t dx dy`: quadratic with a reflected control point
    SmoothQuad,
    /// `c dx1 dy1 dx2 dy2 dx dy`
    Cubic,
    /// `s dx2 dy2 dx dy`: cubic with a reflected first control point
    SmoothCubic,
    /// `z`
    Close,
}

impl Command {
    /// Look up a command by its letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Command::Move),
            'l' => Some(Command::Line),
            'h' => Some(Command::Horizontal),
            'v' => Some(Command::Vertical),
            'q' => Some(Command::Quad),
            't' => Some(Command::SmoothQuad),
            'c' => Some(Command::Cubic),
            's' => Some(Command::SmoothCubic),
            'z' => Some(Command::Close),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Command::Move => 'M',
            Command::Line => 'l',
            Command::Horizontal => 'h',
            Command::Vertical => 'v',
            Command::Quad => 'q',
            Command::SmoothQuad => 't',
            Command::Cubic => 'c',
            Command::SmoothCubic => 's',
            Command::Close => 'z',
        }
    }

    /// Number of numeric arguments one instance of the command takes
    pub fn arity(&self) -> usize {
        match self {
            Command::Move | Command::Line | Command::SmoothQuad => 2,
            Command::Horizontal | Command::Vertical => 1,
            Command::Quad | Command::SmoothCubic => 4,
            Command::Cubic => 6,
            Command::Close => 0,
        }
    }

    /// Whether the command produces a segment of the output formula
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Command::Move | Command::Close)
    }

    pub fn is_quadratic(&self) -> bool {
        matches!(self, Command::Quad | Command::SmoothQuad)
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self, Command::Cubic | Command::SmoothCubic)
    }
}
