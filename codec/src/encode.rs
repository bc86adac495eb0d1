//! Position to bit-field encoding.
//!
//! Layout, in order:
//!
//! 1. one 5-bit symbol per character of [`Position::board_text`]
//! 2. side to move (1 bit)
//! 3. castling mask (4 bits)
//! 4. en-passant index (5 bits)
//! 5. half-move clock (6 bits)
//! 6. full-move number ([`full_move_width`] bits)
//!
//! The full-move field carries no length prefix. A reader has to learn its
//! width out of band.

use std::fmt;

use bitstream::BitField;
use tracing::{debug, trace};

use crate::error::{require_in_range, CodecError, CodecResult, FieldKind};
use crate::position::{Position, MAX_FULL_MOVE_NUMBER};
use crate::symbol::{symbol_code, SYMBOL_BITS};

pub const SIDE_TO_MOVE_BITS: u8 = 1;
pub const CASTLING_BITS: u8 = 4;
pub const EN_PASSANT_BITS: u8 = 5;
pub const HALF_MOVE_CLOCK_BITS: u8 = 6;

/// Widest full-move field; `2^13` exceeds [`MAX_FULL_MOVE_NUMBER`].
pub const MAX_FULL_MOVE_BITS: u8 = 13;

/// What an encoded field stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    /// A board symbol: run digit, `e`, or piece letter.
    Symbol(char),
    SideToMove,
    Castling,
    EnPassant,
    HalfMoveClock,
    FullMoveNumber,
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(c) => write!(f, "symbol '{c}'"),
            Self::SideToMove => f.write_str("side_to_move"),
            Self::Castling => f.write_str("castling"),
            Self::EnPassant => f.write_str("en_passant"),
            Self::HalfMoveClock => f.write_str("half_move_clock"),
            Self::FullMoveNumber => f.write_str("full_move_number"),
        }
    }
}

/// A field together with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedField {
    pub label: FieldLabel,
    pub field: BitField,
}

/// Smallest width `i` in `1..=13` with `number < 2^i`.
pub fn full_move_width(number: u32) -> CodecResult<u8> {
    let number = require_in_range(FieldKind::FullMoveNumber, number, 1, MAX_FULL_MOVE_NUMBER)?;
    let width = (1..=MAX_FULL_MOVE_BITS)
        .find(|&bits| number < 1u32 << bits)
        .unwrap_or(MAX_FULL_MOVE_BITS);
    Ok(width)
}

/// Encodes `position` into labeled fields in wire order.
pub fn encode_labeled(position: &Position) -> CodecResult<Vec<EncodedField>> {
    let board = position.board_text();
    trace!(board = %board, "rendered board");

    let mut fields = Vec::with_capacity(board.len() + 5);
    for symbol in board.chars() {
        let code = symbol_code(symbol).ok_or_else(|| CodecError::InvalidSymbol {
            symbol: symbol.to_string(),
        })?;
        fields.push(EncodedField {
            label: FieldLabel::Symbol(symbol),
            field: BitField::new(u64::from(code), SYMBOL_BITS)?,
        });
    }

    let full_move = u32::from(position.full_move_number.get());
    let state = [
        (
            FieldLabel::SideToMove,
            position.side_to_move.bit(),
            SIDE_TO_MOVE_BITS,
        ),
        (
            FieldLabel::Castling,
            u64::from(position.castling.bits()),
            CASTLING_BITS,
        ),
        (
            FieldLabel::EnPassant,
            u64::from(position.en_passant.index()),
            EN_PASSANT_BITS,
        ),
        (
            FieldLabel::HalfMoveClock,
            u64::from(position.half_move_clock.get()),
            HALF_MOVE_CLOCK_BITS,
        ),
        (
            FieldLabel::FullMoveNumber,
            u64::from(full_move),
            full_move_width(full_move)?,
        ),
    ];
    for (label, value, bits) in state {
        fields.push(EncodedField {
            label,
            field: BitField::new(value, bits)?,
        });
    }
    Ok(fields)
}

/// Encodes `position` into the field sequence consumed by [`bitstream::pack`].
pub fn encode_fields(position: &Position) -> CodecResult<Vec<BitField>> {
    Ok(encode_labeled(position)?
        .into_iter()
        .map(|encoded| encoded.field)
        .collect())
}

/// Packs `position` into its binary form.
pub fn encode(position: &Position) -> CodecResult<BinaryFen> {
    let fields = encode_fields(position)?;
    let bytes = bitstream::pack(&fields);
    debug!(
        fields = fields.len(),
        bits = bitstream::total_bits(&fields),
        bytes = bytes.len(),
        "encoded position"
    );
    Ok(BinaryFen(bytes))
}

/// A packed position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryFen(Vec<u8>);

impl BinaryFen {
    /// Encodes `position`; same as [`encode`].
    pub fn from_position(position: &Position) -> CodecResult<Self> {
        encode(position)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for BinaryFen {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Lowercase hex, two digits per byte.
impl fmt::LowerHex for BinaryFen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
