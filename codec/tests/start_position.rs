use bitstream::{pack, BitField};
use codec::{
    encode, encode_fields, Castling, Color, EnPassant, FullMoveNumber, HalfMoveClock, PieceKind,
    Position, Square,
};

fn literal_fields(literals: &[&str]) -> Vec<BitField> {
    literals
        .iter()
        .map(|literal| BitField::from_binary_str(literal).unwrap())
        .collect()
}

fn start_position_by_hand() -> Position {
    use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

    let mut squares = Vec::new();
    for kind in [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook] {
        squares.push(Square::black(kind));
    }
    squares.push(Square::pieces(Pawn, Color::Black, 8).unwrap());
    squares.push(Square::empty(32).unwrap());
    squares.push(Square::pieces(Pawn, Color::White, 8).unwrap());
    for kind in [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook] {
        squares.push(Square::white(kind));
    }
    Position::new(squares, Color::White)
}

#[test]
fn start_position_matches_explicit_symbol_sequence() {
    let expected = pack(&literal_fields(&[
        // black back rank
        "01110", "01100", "01101", "01111", "10000", "01101", "01100", "01110",
        // black pawns
        "01000", "01011",
        // empty squares
        "00011", "00010", "01010",
        // white pawns
        "01000", "10001",
        // white back rank
        "10100", "10010", "10011", "10101", "10110", "10011", "10010", "10100",
        // side to move, castling, en passant, half moves, full moves
        "0", "1111", "10000", "000000", "1",
    ]));

    let actual = encode(&start_position_by_hand()).unwrap();
    assert_eq!(actual.as_bytes(), &expected[..]);
}

#[test]
fn start_position_reference_bytes() {
    let actual = encode(&Position::starting()).unwrap();
    assert_eq!(
        actual.as_bytes(),
        &[
            0x73, 0x1a, 0xf8, 0x35, 0x8e, 0x42, 0xc6, 0x25, 0x22, 0x34, 0x94, 0xeb, 0x69, 0xca,
            0x8f, 0x80, 0x10
        ]
    );
    assert_eq!(Position::starting(), start_position_by_hand());
}

#[test]
fn start_position_has_no_extra_padding() {
    let position = Position::starting();
    let fields = encode_fields(&position).unwrap();
    // 23 symbols plus 1 + 4 + 5 + 6 + 1 state bits
    assert_eq!(fields.len(), 28);
    assert_eq!(bitstream::total_bits(&fields), 132);
    assert_eq!(encode(&position).unwrap().len(), 17);
}

#[test]
fn game_state_changes_only_touch_the_tail() {
    let base = encode(&Position::starting()).unwrap();
    let later = Position::starting()
        .with_castling(Castling::from_fen("Kq").unwrap())
        .with_en_passant(EnPassant::from_fen("e3").unwrap())
        .with_half_move_clock(HalfMoveClock::new(50).unwrap())
        .with_full_move_number(FullMoveNumber::new(5949).unwrap());
    let later = encode(&later).unwrap();

    // board symbols occupy the first 115 bits, i.e. 14 whole bytes
    assert_eq!(&base.as_bytes()[..14], &later.as_bytes()[..14]);
    // 115 + 16 + 13 = 144 bits
    assert_eq!(later.len(), 18);
}

#[test]
fn out_of_range_state_fails_before_encoding() {
    assert!(HalfMoveClock::new(51).is_err());
    assert!(FullMoveNumber::new(0).is_err());
    assert!(FullMoveNumber::new(5950).is_err());
    assert!(Square::empty(65).is_err());
}
