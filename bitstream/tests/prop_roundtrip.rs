use bitstream::{pack, pack_into, packed_len, total_bits, BitField, BitReader};
use proptest::prelude::*;

fn mask_value(bits: u8, value: u64) -> u64 {
    if bits >= 64 {
        value
    } else {
        let mask = (1u64 << bits) - 1;
        value & mask
    }
}

fn field_strategy() -> impl Strategy<Value = BitField> {
    (1u8..=64, any::<u64>())
        .prop_map(|(bits, value)| BitField::new(mask_value(bits, value), bits).unwrap())
}

proptest! {
    #[test]
    fn prop_packed_length(fields in prop::collection::vec(field_strategy(), 0..64)) {
        let bytes = pack(&fields);
        prop_assert_eq!(bytes.len(), total_bits(&fields).div_ceil(8));
        prop_assert_eq!(bytes.len(), packed_len(&fields));
    }

    #[test]
    fn prop_roundtrip_fields(fields in prop::collection::vec(field_strategy(), 1..64)) {
        let bytes = pack(&fields);
        let mut reader = BitReader::new(&bytes);

        for field in &fields {
            prop_assert_eq!(reader.read_field(field.bits()).unwrap(), *field);
        }
        prop_assert!(reader.bits_remaining() < 8);
        while !reader.is_empty() {
            prop_assert!(!reader.read_bit().unwrap(), "padding must be zero");
        }
    }

    #[test]
    fn prop_truncated_pack_is_prefix(
        fields in prop::collection::vec(field_strategy(), 1..32),
        cut in any::<prop::sample::Index>(),
    ) {
        let full = pack(&fields);
        let len = cut.index(full.len() + 1);
        let mut buf = vec![0u8; len];
        pack_into(&fields, &mut buf);
        prop_assert_eq!(&buf[..], &full[..len]);
    }
}
