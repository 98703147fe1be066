//! Move-list notation.
//!
//! Accepts compact letter runs (`"RRDLU"`), words (`"right down left"`)
//! or a mix separated by whitespace or commas (`"RR, up, L"`).

use anyhow::{bail, Result};
use slide_core::Direction;

/// Parse a move list into directions.
pub fn parse_moves(s: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        if let Ok(direction) = token.parse::<Direction>() {
            moves.push(direction);
            continue;
        }
        for c in token.chars() {
            match Direction::from_letter(c) {
                Some(direction) => moves.push(direction),
                None => bail!("invalid move {c:?} in {token:?}"),
            }
        }
    }
    Ok(moves)
}

/// Compact letter form of a move list, e.g. `"RRDL"`.
pub fn format_moves(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.letter()).collect()
}
