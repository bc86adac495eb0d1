//! Error types for position construction and encoding.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while building or encoding a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Bitstream error.
    Bitstream(bitstream::BitError),

    /// A bounded value fell outside its declared range.
    OutOfRange {
        field: FieldKind,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A character or square name with no meaning in the symbol table.
    InvalidSymbol { symbol: String },
}

/// Bounded parameter named by [`CodecError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Run,
    Castling,
    EnPassant,
    HalfMoveClock,
    FullMoveNumber,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{field} must be an integer between {min} and {max}, got {value}"
                )
            }
            Self::InvalidSymbol { symbol } => write!(f, "invalid symbol {symbol:?}"),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Run => "run",
            Self::Castling => "castling",
            Self::EnPassant => "en_passant",
            Self::HalfMoveClock => "half_move_clock",
            Self::FullMoveNumber => "full_move_number",
        };
        f.write_str(name)
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}

/// Returns `value` if it lies in `min..=max`.
pub(crate) const fn require_in_range(
    field: FieldKind,
    value: u32,
    min: u32,
    max: u32,
) -> CodecResult<u32> {
    if value < min || value > max {
        return Err(CodecError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
