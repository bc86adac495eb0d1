#![no_main]

use bitstream::{pack, pack_into, BitField};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&cut, rest)) = data.split_first() else {
        return;
    };

    // Each pair of input bytes becomes one field: width, then value seed.
    let fields: Vec<BitField> = rest
        .chunks_exact(2)
        .filter_map(|pair| {
            let bits = pair[0] % 64 + 1;
            let value = u64::from(pair[1]).rotate_left(u32::from(pair[0]));
            let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
            BitField::new(value & mask, bits).ok()
        })
        .collect();

    let full = pack(&fields);
    let len = usize::from(cut).min(full.len());
    let mut buf = vec![0u8; len];
    pack_into(&fields, &mut buf);
    assert_eq!(&buf[..], &full[..len]);
});
