//! The fixed 5-bit symbol table.
//!
//! | code    | symbol                 |
//! |---------|------------------------|
//! | 0..=9   | decimal digits `0`-`9` |
//! | 10      | `e` (empty square)     |
//! | 11..=16 | `p n b r q k` (black)  |
//! | 17..=22 | `P N B R Q K` (white)  |
//! | 23..=31 | reserved               |

/// Width of every board symbol.
pub const SYMBOL_BITS: u8 = 5;

/// Symbols indexed by their code.
pub const SYMBOL_TABLE: [char; 23] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'e', 'p', 'n', 'b', 'r', 'q', 'k', 'P',
    'N', 'B', 'R', 'Q', 'K',
];

/// Returns the code for `symbol`, or `None` if it is not in the table.
#[must_use]
pub const fn symbol_code(symbol: char) -> Option<u8> {
    let code = match symbol {
        '0'..='9' => symbol as u8 - b'0',
        'e' => 10,
        'p' => 11,
        'n' => 12,
        'b' => 13,
        'r' => 14,
        'q' => 15,
        'k' => 16,
        'P' => 17,
        'N' => 18,
        'B' => 19,
        'R' => 20,
        'Q' => 21,
        'K' => 22,
        _ => return None,
    };
    Some(code)
}

/// Returns the symbol for `code`, or `None` for reserved codes.
#[must_use]
pub const fn symbol_char(code: u8) -> Option<char> {
    if (code as usize) < SYMBOL_TABLE.len() {
        Some(SYMBOL_TABLE[code as usize])
    } else {
        None
    }
}
