//! Bit-level reader with bounded operations.

use crate::error::{BitError, BitResult};
use crate::field::{BitField, MAX_FIELD_BITS};

/// Reads fields back out of a buffer produced by [`pack`](crate::pack).
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new `BitReader` from a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Returns the number of bits remaining to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.data
            .len()
            .saturating_mul(8)
            .saturating_sub(self.bit_pos)
    }

    /// Returns `true` if there are no more bits to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Returns the current bit position.
    #[must_use]
    pub const fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Reads a single bit as a boolean.
    pub fn read_bit(&mut self) -> BitResult<bool> {
        if self.bits_remaining() == 0 {
            return Err(BitError::UnexpectedEof {
                requested: 1,
                available: 0,
            });
        }
        let byte_idx = self.bit_pos / 8;
        let bit_idx = self.bit_pos % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_idx)) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// Reads `bits` bits (1 to 64) as an unsigned integer.
    pub fn read_bits(&mut self, bits: u8) -> BitResult<u64> {
        if bits == 0 || bits > MAX_FIELD_BITS {
            return Err(BitError::InvalidBitCount {
                bits,
                max_bits: MAX_FIELD_BITS,
            });
        }
        let available = self.bits_remaining();
        if usize::from(bits) > available {
            return Err(BitError::UnexpectedEof {
                requested: usize::from(bits),
                available,
            });
        }

        let mut value = 0u64;
        for _ in 0..bits {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// Reads a `bits`-wide [`BitField`].
    pub fn read_field(&mut self, bits: u8) -> BitResult<BitField> {
        let value = self.read_bits(bits)?;
        BitField::new(value, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reader() {
        let reader = BitReader::new(&[]);
        assert!(reader.is_empty());
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_from_empty_fails() {
        let mut reader = BitReader::new(&[]);
        let result = reader.read_bit();
        assert!(matches!(result, Err(BitError::UnexpectedEof { .. })));
    }

    #[test]
    fn read_bits_across_bytes() {
        let mut reader = BitReader::new(&[0b1111_0000, 0b0000_1111]);
        assert_eq!(reader.read_bits(12).unwrap(), 0b1111_0000_0000);
        assert_eq!(reader.bits_remaining(), 4);
    }

    #[test]
    fn read_bits_zero_width_fails() {
        let mut reader = BitReader::new(&[0xFF]);
        assert!(matches!(
            reader.read_bits(0),
            Err(BitError::InvalidBitCount { bits: 0, .. })
        ));
        assert_eq!(reader.bit_position(), 0);
    }

    #[test]
    fn read_bits_past_end_fails_without_consuming() {
        let mut reader = BitReader::new(&[0xFF]);
        reader.read_bits(5).unwrap();
        let err = reader.read_bits(5).unwrap_err();
        assert_eq!(
            err,
            BitError::UnexpectedEof {
                requested: 5,
                available: 3
            }
        );
        assert_eq!(reader.bit_position(), 5);
    }

    #[test]
    fn read_field_five_bit_symbols() {
        let mut reader = BitReader::new(&[0b0111_0011, 0b0001_1010]);
        assert_eq!(reader.read_field(5).unwrap().value(), 0b01110);
        assert_eq!(reader.read_field(5).unwrap().value(), 0b01100);
        assert_eq!(reader.read_field(5).unwrap().value(), 0b01101);
        assert_eq!(reader.bits_remaining(), 1);
    }
}
