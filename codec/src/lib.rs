//! Binary encoding of chess positions (BFEN).
//!
//! This crate maps a [`Position`] onto an ordered sequence of
//! [`BitField`](bitstream::BitField)s and packs them with the `bitstream`
//! crate into a compact [`BinaryFen`].
//!
//! # Features
//!
//! - Run-length board rendering with a fixed 5-bit symbol table
//! - Fixed-width game-state fields
//! - Minimal-width full-move counter
//!
//! # Design Principles
//!
//! - **Fail fast** - Out-of-range values are rejected when constructed, never clamped.
//! - **Deterministic** - Same inputs produce byte-identical outputs.
//! - **Encode only** - The full-move width is not recoverable from the output alone.
//!
//! # Example
//!
//! ```
//! use codec::{encode, Position};
//!
//! let encoded = encode(&Position::starting()).unwrap();
//! assert_eq!(encoded.len(), 17);
//! ```

mod encode;
mod error;
mod position;
mod symbol;
mod types;

pub use encode::{
    encode, encode_fields, encode_labeled, full_move_width, BinaryFen, EncodedField, FieldLabel,
    CASTLING_BITS, EN_PASSANT_BITS, HALF_MOVE_CLOCK_BITS, MAX_FULL_MOVE_BITS, SIDE_TO_MOVE_BITS,
};
pub use error::{CodecError, CodecResult, FieldKind};
pub use position::{
    Castling, EnPassant, FullMoveNumber, HalfMoveClock, Position, MAX_FULL_MOVE_NUMBER,
    MAX_HALF_MOVE_CLOCK,
};
pub use symbol::{symbol_char, symbol_code, SYMBOL_BITS, SYMBOL_TABLE};
pub use types::{Color, Piece, PieceKind, Run, Square, MAX_RUN};
