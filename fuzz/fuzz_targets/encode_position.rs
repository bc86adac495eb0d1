#![no_main]

use codec::{Color, PieceKind, Position, Square};
use libfuzzer_sys::fuzz_target;

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fuzz_target!(|data: &[u8]| {
    // Each pair of input bytes becomes one board entry: kind selector, run.
    let squares: Vec<Square> = data
        .chunks_exact(2)
        .take(64)
        .filter_map(|pair| {
            let run = u32::from(pair[1] % 64) + 1;
            match pair[0] % 13 {
                12 => Square::empty(run).ok(),
                n => {
                    let color = if n < 6 { Color::White } else { Color::Black };
                    Square::pieces(KINDS[usize::from(n % 6)], color, run).ok()
                }
            }
        })
        .collect();

    let position = Position::new(squares, Color::White);
    let fields = codec::encode_fields(&position).expect("valid position encodes");
    let encoded = codec::encode(&position).expect("valid position encodes");
    assert_eq!(encoded.len(), bitstream::packed_len(&fields));
});
