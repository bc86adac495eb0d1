//! FEN front end and inspection helpers for the BFEN codec.
//!
//! This crate sits outside the codec proper:
//!
//! - Parse standard FEN text into a run-compressed [`Position`]
//! - Explain an encoding field by field, with bit offsets
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt::Write as _;

use anyhow::{bail, ensure, Context, Result};
use codec::{
    Castling, Color, EnPassant, FieldLabel, FullMoveNumber, HalfMoveClock, Piece, Position, Run,
    Square,
};
use serde::Serialize;

const BOARD_FILES: usize = 8;
const BOARD_RANKS: usize = 8;

/// Parses FEN text into a position.
///
/// Only the piece placement is required. Missing trailing fields default to
/// white to move, `KQkq`, no en-passant target, half-move clock 0 and
/// full-move number 1. Identical neighbouring squares collapse into runs,
/// continuing across rank separators.
pub fn parse_fen(fen: &str) -> Result<Position> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().context("empty FEN")?;
    let squares = parse_placement(placement)?;

    let side_to_move = match parts.next().unwrap_or("w") {
        "w" => Color::White,
        "b" => Color::Black,
        other => bail!("invalid side to move {other:?}"),
    };
    let castling = Castling::from_fen(parts.next().unwrap_or("KQkq")).context("castling")?;
    let en_passant = EnPassant::from_fen(parts.next().unwrap_or("-")).context("en passant")?;
    let half_moves: u32 = parts
        .next()
        .unwrap_or("0")
        .parse()
        .context("half-move clock")?;
    let full_moves: u32 = parts
        .next()
        .unwrap_or("1")
        .parse()
        .context("full-move number")?;
    if let Some(extra) = parts.next() {
        bail!("unexpected trailing FEN field {extra:?}");
    }

    Ok(Position::new(squares, side_to_move)
        .with_castling(castling)
        .with_en_passant(en_passant)
        .with_half_move_clock(HalfMoveClock::new(half_moves)?)
        .with_full_move_number(FullMoveNumber::new(full_moves)?))
}

fn parse_placement(placement: &str) -> Result<Vec<Square>> {
    let ranks: Vec<&str> = placement.split('/').collect();
    ensure!(
        ranks.len() == BOARD_RANKS,
        "expected {BOARD_RANKS} ranks, found {}",
        ranks.len()
    );

    let mut cells: Vec<Option<Piece>> = Vec::with_capacity(BOARD_FILES * BOARD_RANKS);
    for (index, rank) in ranks.iter().enumerate() {
        let start = cells.len();
        for c in rank.chars() {
            match c.to_digit(10) {
                Some(empty @ 1..=8) => cells.extend((0..empty).map(|_| None)),
                Some(_) => bail!("invalid empty-square count {c:?}"),
                None => cells.push(Some(Piece::from_symbol(c)?)),
            }
        }
        ensure!(
            cells.len() - start == BOARD_FILES,
            "rank {} covers {} squares, expected {BOARD_FILES}",
            BOARD_RANKS - index,
            cells.len() - start
        );
    }

    let mut squares = Vec::new();
    let mut cells = cells.into_iter().peekable();
    while let Some(cell) = cells.next() {
        let mut count = 1u32;
        while cells.next_if_eq(&cell).is_some() {
            count += 1;
        }
        let run = Run::new(count)?;
        squares.push(match cell {
            Some(piece) => Square::Piece { piece, run },
            None => Square::Empty { run },
        });
    }
    Ok(squares)
}

/// One encoded field, as reported by `bfen-tools fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    pub value: u64,
    pub bits: u8,
    pub offset: usize,
}

/// Lists the fields of `position` in wire order with their bit offsets.
pub fn field_report(position: &Position) -> Result<Vec<FieldRow>> {
    let mut offset = 0usize;
    let rows = codec::encode_labeled(position)?
        .into_iter()
        .map(|encoded| {
            let symbol = match encoded.label {
                FieldLabel::Symbol(c) => Some(c),
                _ => None,
            };
            let label = match encoded.label {
                FieldLabel::Symbol(_) => "symbol".to_string(),
                other => other.to_string(),
            };
            let row = FieldRow {
                label,
                symbol,
                value: encoded.field.value(),
                bits: encoded.field.bits(),
                offset,
            };
            offset += usize::from(encoded.field.bits());
            row
        })
        .collect();
    Ok(rows)
}

/// Renders a field report as an aligned table.
#[must_use]
pub fn format_fields_pretty(rows: &[FieldRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let name = match row.symbol {
            Some(c) => format!("{} '{c}'", row.label),
            None => row.label.clone(),
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<18} {:>5} ({} bits) {:0width$b}",
            row.offset,
            name,
            row.value,
            row.bits,
            row.value,
            width = usize::from(row.bits)
        );
    }
    out
}
