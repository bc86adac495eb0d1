//! MSB-first packing of width-tagged fields into a byte buffer.

use crate::field::BitField;

/// Sum of the widths of `fields`.
#[must_use]
pub fn total_bits(fields: &[BitField]) -> usize {
    fields.iter().map(|field| usize::from(field.bits())).sum()
}

/// Number of bytes needed to hold `fields` back to back.
#[must_use]
pub fn packed_len(fields: &[BitField]) -> usize {
    total_bits(fields).div_ceil(8)
}

/// Packs `fields` into a freshly allocated buffer of exactly
/// [`packed_len`] bytes.
///
/// Fields are laid out as one unbroken bitstream, most significant bit
/// first within each byte. Unused low bits of the final byte are zero.
#[must_use]
pub fn pack(fields: &[BitField]) -> Vec<u8> {
    let mut buf = vec![0u8; packed_len(fields)];
    pack_into(fields, &mut buf);
    buf
}

/// Packs `fields` into a caller-supplied buffer starting at bit 0.
///
/// Bits are OR-ed into `buf`, so it should be zeroed beforehand. If `buf` is
/// shorter than [`packed_len`], packing stops silently at its end.
pub fn pack_into(fields: &[BitField], buf: &mut [u8]) {
    let mut packer = BitPacker::new(buf);
    for field in fields {
        if packer.is_full() {
            break;
        }
        packer.write(field);
    }
}

/// Write cursor over a fixed byte buffer.
#[derive(Debug)]
pub struct BitPacker<'a> {
    buf: &'a mut [u8],
    bit_pos: usize,
}

impl<'a> BitPacker<'a> {
    /// Creates a packer positioned at the first bit of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bits_written(&self) -> usize {
        self.bit_pos
    }

    /// Returns `true` once every bit of the buffer has been written.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bit_pos >= self.buf.len() * 8
    }

    /// Appends `field` after the previously written bits.
    ///
    /// A field that straddles a byte boundary is split: its high bits fill
    /// the low bits of the current byte, the remainder continues in the next
    /// one. Bits that fall past the end of the buffer are dropped.
    pub fn write(&mut self, field: &BitField) {
        let value = field.value();
        let mut remaining = field.bits();

        while remaining > 0 {
            let index = self.bit_pos / 8;
            let Some(byte) = self.buf.get_mut(index) else {
                return;
            };
            // free is in 1..=8
            let free = 8 - (self.bit_pos % 8) as u8;
            let take = remaining.min(free);
            let chunk = (value >> (remaining - take)) & ((1u64 << take) - 1);
            *byte |= (chunk as u8) << (free - take);

            self.bit_pos += usize::from(take);
            remaining -= take;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: u64, bits: u8) -> BitField {
        BitField::new(value, bits).unwrap()
    }

    #[test]
    fn pack_empty() {
        assert!(pack(&[]).is_empty());
        assert_eq!(total_bits(&[]), 0);
    }

    #[test]
    fn pack_single_bit() {
        assert_eq!(pack(&[field(1, 1)]), vec![0b1000_0000]);
        assert_eq!(pack(&[field(0, 1)]), vec![0b0000_0000]);
    }

    #[test]
    fn pack_full_byte() {
        assert_eq!(pack(&[field(0xAB, 8)]), vec![0xAB]);
    }

    #[test]
    fn pack_partial_byte_with_padding() {
        assert_eq!(pack(&[field(0b11010, 5)]), vec![0b1101_0000]);
    }

    #[test]
    fn pack_across_byte_boundary() {
        let bytes = pack(&[field(0b1111, 4), field(0b1010_1010, 8)]);
        assert_eq!(bytes, vec![0b1111_1010, 0b1010_0000]);
    }

    #[test]
    fn pack_five_bit_symbols_straddle() {
        // 01110 01100 01101 -> 0111_0011 0001_1010
        let bytes = pack(&[field(0b01110, 5), field(0b01100, 5), field(0b01101, 5)]);
        assert_eq!(bytes, vec![0b0111_0011, 0b0001_1010]);
    }

    #[test]
    fn pack_wide_field_spans_three_bytes() {
        let bytes = pack(&[field(0b101, 3), field(0xABCD, 16)]);
        // 101 + 1010_1011_1100_1101 = 1011_0101 0111_1001 101(0_0000)
        assert_eq!(bytes, vec![0b1011_0101, 0b0111_1001, 0b1010_0000]);
    }

    #[test]
    fn pack_64_bit_field() {
        assert_eq!(pack(&[field(u64::MAX, 64)]), vec![0xFF; 8]);
    }

    #[test]
    fn packed_len_rounds_up() {
        let fields = [field(0, 5), field(0, 4)];
        assert_eq!(total_bits(&fields), 9);
        assert_eq!(packed_len(&fields), 2);
    }

    #[test]
    fn pack_into_truncates_silently() {
        let mut buf = [0u8; 1];
        pack_into(&[field(0b1111, 4), field(0b1010_1010, 8)], &mut buf);
        assert_eq!(buf, [0b1111_1010]);
    }

    #[test]
    fn pack_into_empty_buffer() {
        let mut buf: [u8; 0] = [];
        pack_into(&[field(1, 1)], &mut buf);
    }

    #[test]
    fn pack_into_ors_existing_bits() {
        let mut buf = [0b0000_0001];
        pack_into(&[field(0b1, 1)], &mut buf);
        assert_eq!(buf, [0b1000_0001]);
    }

    #[test]
    fn packer_tracks_position() {
        let mut buf = [0u8; 2];
        let mut packer = BitPacker::new(&mut buf);
        packer.write(&field(0b101, 3));
        assert_eq!(packer.bits_written(), 3);
        assert!(!packer.is_full());
        packer.write(&field(0x1FFF, 13));
        assert_eq!(packer.bits_written(), 16);
        assert!(packer.is_full());
        assert_eq!(buf, [0b1011_1111, 0xFF]);
    }
}
