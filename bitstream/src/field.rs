//! Width-tagged values submitted to the packer.

use crate::error::{BitError, BitResult};

/// Widest field the packer accepts.
pub const MAX_FIELD_BITS: u8 = 64;

/// An unsigned value paired with the exact number of bits it occupies.
///
/// Construction enforces `1 <= bits <= 64` and `value < 2^bits`, so every
/// `BitField` can be packed without truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    value: u64,
    bits: u8,
}

impl BitField {
    /// Creates a field holding `value` in exactly `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBitCount`] if `bits` is zero or above 64.
    /// Returns [`BitError::ValueOutOfRange`] if `value` doesn't fit in `bits`.
    pub const fn new(value: u64, bits: u8) -> BitResult<Self> {
        if bits == 0 || bits > MAX_FIELD_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: MAX_FIELD_BITS,
            });
        }
        if bits < MAX_FIELD_BITS && value >= (1u64 << bits) {
            return Err(BitError::ValueOutOfRange { value, bits });
        }
        Ok(Self { value, bits })
    }

    /// Parses a literal such as `"01011"`; the width is the literal's length.
    ///
    /// # Errors
    ///
    /// Returns [`BitError::InvalidBinaryString`] for an empty literal or one
    /// containing characters other than `0` and `1`, and
    /// [`BitError::InvalidBitCount`] for literals longer than 64 digits.
    pub fn from_binary_str(literal: &str) -> BitResult<Self> {
        if literal.is_empty() || !literal.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(BitError::InvalidBinaryString {
                literal: literal.to_owned(),
            });
        }
        let bits = u8::try_from(literal.len())
            .ok()
            .filter(|&bits| bits <= MAX_FIELD_BITS)
            .ok_or(BitError::InvalidBitCount {
                bits: u8::MAX,
                max_bits: MAX_FIELD_BITS,
            })?;
        let value = literal
            .bytes()
            .fold(0u64, |acc, b| (acc << 1) | u64::from(b - b'0'));
        Self::new(value, bits)
    }

    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The field width in bits.
    #[must_use]
    pub const fn bits(&self) -> u8 {
        self.bits
    }
}
