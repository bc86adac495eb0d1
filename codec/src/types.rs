//! Board model: pieces, runs and squares.

use std::fmt;

use crate::error::{require_in_range, CodecError, CodecResult, FieldKind};

/// Side of a piece, or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The 1-bit side-to-move code: white 0, black 1.
    #[must_use]
    pub const fn bit(self) -> u64 {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }
}

/// Kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter for this kind.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// Parses a FEN letter of either case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Parses a FEN letter; the case selects the color.
    pub fn from_symbol(symbol: char) -> CodecResult<Self> {
        let kind = PieceKind::from_letter(symbol).ok_or_else(|| CodecError::InvalidSymbol {
            symbol: symbol.to_string(),
        })?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self { kind, color })
    }
}

/// Largest run: every square of the board.
pub const MAX_RUN: u8 = 64;

/// Count of identical consecutive squares, always in `1..=64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Run(u8);

impl Run {
    /// A single square.
    pub const ONE: Self = Self(1);

    /// Creates a run of `count` squares.
    pub fn new(count: u32) -> CodecResult<Self> {
        let count = require_in_range(FieldKind::Run, count, 1, u32::from(MAX_RUN))?;
        // bounded by MAX_RUN above
        Ok(Self(count as u8))
    }

    pub(crate) const fn new_unchecked(count: u8) -> Self {
        debug_assert!(count >= 1 && count <= MAX_RUN);
        Self(count)
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One board entry: a run of identical pieces or of empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Piece { piece: Piece, run: Run },
    Empty { run: Run },
}

impl Square {
    /// A run of `count` identical pieces.
    pub fn pieces(kind: PieceKind, color: Color, count: u32) -> CodecResult<Self> {
        Ok(Self::Piece {
            piece: Piece::new(kind, color),
            run: Run::new(count)?,
        })
    }

    /// A single white piece.
    #[must_use]
    pub const fn white(kind: PieceKind) -> Self {
        Self::Piece {
            piece: Piece::new(kind, Color::White),
            run: Run::ONE,
        }
    }

    /// A single black piece.
    #[must_use]
    pub const fn black(kind: PieceKind) -> Self {
        Self::Piece {
            piece: Piece::new(kind, Color::Black),
            run: Run::ONE,
        }
    }

    /// A run of `count` empty squares.
    pub fn empty(count: u32) -> CodecResult<Self> {
        Ok(Self::Empty {
            run: Run::new(count)?,
        })
    }

    /// Number of board squares this entry covers.
    #[must_use]
    pub const fn run(&self) -> Run {
        match self {
            Self::Piece { run, .. } | Self::Empty { run } => *run,
        }
    }

    /// The table symbol this entry repeats.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Piece { piece, .. } => piece.symbol(),
            Self::Empty { .. } => 'e',
        }
    }

    /// Appends the textual form: the symbol once or twice for runs of 1
    /// and 2, otherwise the decimal count followed by the symbol.
    pub fn render_into(&self, out: &mut String) {
        let symbol = self.symbol();
        match self.run().get() {
            1 => out.push(symbol),
            2 => {
                out.push(symbol);
                out.push(symbol);
            }
            count => {
                out.push_str(&count.to_string());
                out.push(symbol);
            }
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.render_into(&mut text);
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_bounds() {
        assert_eq!(Run::new(1).unwrap().get(), 1);
        assert_eq!(Run::new(64).unwrap().get(), 64);
        assert!(matches!(
            Run::new(0),
            Err(CodecError::OutOfRange {
                field: FieldKind::Run,
                value: 0,
                ..
            })
        ));
        assert!(Run::new(65).is_err());
    }

    #[test]
    fn piece_symbols_follow_color() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).symbol(), 'n');
    }

    #[test]
    fn piece_from_symbol() {
        assert_eq!(
            Piece::from_symbol('Q').unwrap(),
            Piece::new(PieceKind::Queen, Color::White)
        );
        assert_eq!(
            Piece::from_symbol('k').unwrap(),
            Piece::new(PieceKind::King, Color::Black)
        );
        assert!(matches!(
            Piece::from_symbol('x'),
            Err(CodecError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn render_single_and_double() {
        assert_eq!(Square::black(PieceKind::Rook).to_string(), "r");
        assert_eq!(
            Square::pieces(PieceKind::Bishop, Color::Black, 2)
                .unwrap()
                .to_string(),
            "bb"
        );
        assert_eq!(Square::empty(1).unwrap().to_string(), "e");
        assert_eq!(Square::empty(2).unwrap().to_string(), "ee");
    }

    #[test]
    fn render_counted_runs() {
        assert_eq!(
            Square::pieces(PieceKind::Pawn, Color::White, 8)
                .unwrap()
                .to_string(),
            "8P"
        );
        assert_eq!(Square::empty(3).unwrap().to_string(), "3e");
        assert_eq!(Square::empty(32).unwrap().to_string(), "32e");
        assert_eq!(Square::empty(64).unwrap().to_string(), "64e");
    }

    #[test]
    fn square_constructors_validate_run() {
        assert!(Square::empty(0).is_err());
        assert!(Square::pieces(PieceKind::Pawn, Color::White, 65).is_err());
    }
}
