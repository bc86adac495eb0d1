//! Game-state fields and the position they describe.

use crate::error::{require_in_range, CodecError, CodecResult, FieldKind};
use crate::types::{Color, Piece, Run, Square};

/// Fifty-move rule ceiling for the half-move clock.
pub const MAX_HALF_MOVE_CLOCK: u32 = 50;

/// Upper bound on the full-move number of a legal game.
pub const MAX_FULL_MOVE_NUMBER: u32 = 5949;

/// Castling availability as a 4-bit mask.
///
/// Bit order from most to least significant: white king side, white queen
/// side, black king side, black queen side (`KQkq` = `0b1111`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling(u8);

impl Castling {
    pub const WHITE_KING_SIDE: Self = Self(0b1000);
    pub const WHITE_QUEEN_SIDE: Self = Self(0b0100);
    pub const BLACK_KING_SIDE: Self = Self(0b0010);
    pub const BLACK_QUEEN_SIDE: Self = Self(0b0001);
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    /// Creates a mask from its raw 4-bit value.
    pub fn from_bits(bits: u8) -> CodecResult<Self> {
        require_in_range(FieldKind::Castling, u32::from(bits), 0, 0b1111)?;
        Ok(Self(bits))
    }

    /// Parses FEN castling text such as `KQkq`, `Kq` or `-`.
    pub fn from_fen(text: &str) -> CodecResult<Self> {
        if text == "-" {
            return Ok(Self::NONE);
        }
        let invalid = || CodecError::InvalidSymbol {
            symbol: text.to_owned(),
        };
        if text.is_empty() {
            return Err(invalid());
        }
        let mut mask = Self::NONE;
        for c in text.chars() {
            let right = match c {
                'K' => Self::WHITE_KING_SIDE,
                'Q' => Self::WHITE_QUEEN_SIDE,
                'k' => Self::BLACK_KING_SIDE,
                'q' => Self::BLACK_QUEEN_SIDE,
                _ => return Err(invalid()),
            };
            if mask.contains(right) {
                return Err(invalid());
            }
            mask = mask.union(right);
        }
        Ok(mask)
    }

    /// Returns the raw mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for Castling {
    fn default() -> Self {
        Self::ALL
    }
}

/// En-passant target as an index in `0..=15`, or the sentinel 16 for none.
///
/// Indices 0-7 are the files `a`-`h` of a white double step, 8-15 those of
/// a black double step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant(u8);

impl EnPassant {
    pub const NONE: Self = Self(16);

    /// Creates a target from its raw index, 16 meaning none.
    pub fn from_index(index: u8) -> CodecResult<Self> {
        require_in_range(FieldKind::EnPassant, u32::from(index), 0, 16)?;
        Ok(Self(index))
    }

    /// Parses a FEN target square (`e3`, `d6`) or `-`.
    ///
    /// Third-rank targets follow a white double step, sixth-rank targets a
    /// black one; no other rank can hold a target.
    pub fn from_fen(text: &str) -> CodecResult<Self> {
        if text == "-" {
            return Ok(Self::NONE);
        }
        let invalid = || CodecError::InvalidSymbol {
            symbol: text.to_owned(),
        };
        let &[file @ b'a'..=b'h', rank] = text.as_bytes() else {
            return Err(invalid());
        };
        let file = file - b'a';
        match rank {
            b'3' => Ok(Self(file)),
            b'6' => Ok(Self(8 + file)),
            _ => Err(invalid()),
        }
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for EnPassant {
    fn default() -> Self {
        Self::NONE
    }
}

/// Half moves since the last pawn move or capture, in `0..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfMoveClock(u8);

impl HalfMoveClock {
    pub fn new(count: u32) -> CodecResult<Self> {
        let count = require_in_range(FieldKind::HalfMoveClock, count, 0, MAX_HALF_MOVE_CLOCK)?;
        Ok(Self(count as u8))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Full-move counter, in `1..=5949`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FullMoveNumber(u16);

impl FullMoveNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(number: u32) -> CodecResult<Self> {
        let number = require_in_range(
            FieldKind::FullMoveNumber,
            number,
            1,
            MAX_FULL_MOVE_NUMBER,
        )?;
        Ok(Self(number as u16))
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Default for FullMoveNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// A board plus the game state needed to continue play.
///
/// The board is an ordered list of runs starting at a8 and proceeding
/// rank by rank, as in FEN. Runs may cross rank boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub squares: Vec<Square>,
    pub side_to_move: Color,
    pub castling: Castling,
    pub en_passant: EnPassant,
    pub half_move_clock: HalfMoveClock,
    pub full_move_number: FullMoveNumber,
}

impl Position {
    /// Creates a position with full castling rights, no en-passant target,
    /// a zero half-move clock and full-move number 1.
    #[must_use]
    pub fn new(squares: Vec<Square>, side_to_move: Color) -> Self {
        Self {
            squares,
            side_to_move,
            castling: Castling::default(),
            en_passant: EnPassant::default(),
            half_move_clock: HalfMoveClock::default(),
            full_move_number: FullMoveNumber::default(),
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        use crate::types::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let pawns = |color| Square::Piece {
            piece: Piece::new(Pawn, color),
            run: Run::new_unchecked(8),
        };

        let mut squares: Vec<Square> = back_rank.iter().map(|&k| Square::black(k)).collect();
        squares.extend([
            pawns(Color::Black),
            Square::Empty {
                run: Run::new_unchecked(32),
            },
            pawns(Color::White),
        ]);
        squares.extend(back_rank.iter().map(|&k| Square::white(k)));
        Self::new(squares, Color::White)
    }

    #[must_use]
    pub fn with_castling(mut self, castling: Castling) -> Self {
        self.castling = castling;
        self
    }

    #[must_use]
    pub fn with_en_passant(mut self, en_passant: EnPassant) -> Self {
        self.en_passant = en_passant;
        self
    }

    #[must_use]
    pub fn with_half_move_clock(mut self, clock: HalfMoveClock) -> Self {
        self.half_move_clock = clock;
        self
    }

    #[must_use]
    pub fn with_full_move_number(mut self, number: FullMoveNumber) -> Self {
        self.full_move_number = number;
        self
    }

    /// Total number of board squares covered by the runs.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.squares
            .iter()
            .map(|square| usize::from(square.run().get()))
            .sum()
    }

    /// The rendered board text the symbol fields are derived from, e.g.
    /// `rnbqkbnr8p32e8PRNBQKBNR` for the starting position.
    #[must_use]
    pub fn board_text(&self) -> String {
        let mut text = String::with_capacity(self.squares.len() * 2);
        for square in &self.squares {
            square.render_into(&mut text);
        }
        text
    }
}
