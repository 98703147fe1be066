//! Random tile placement.

use rand::Rng;

use crate::board::Board;
use crate::{Coord, Tile};

/// Value of every spawned tile.
pub const SPAWN_VALUE: u32 = 2;

/// Rejection-sampling budget, per board cell, before falling back to a
/// direct pick among the empty cells.
const ATTEMPTS_PER_CELL: usize = 16;

/// Place a [`SPAWN_VALUE`] tile on a uniformly chosen empty cell.
///
/// Draws indices over the whole board and retries on occupied cells. A
/// full board is left alone and returns `None` without touching `rng`.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Coord> {
    if board.is_full() {
        return None;
    }

    let len = board.len();
    for _ in 0..len * ATTEMPTS_PER_CELL {
        let index = rng.random_range(0..len);
        if !board.is_occupied_index(index) {
            return Some(place(board, index));
        }
    }

    let empty = board.empty_indices();
    let index = empty[rng.random_range(0..empty.len())];
    Some(place(board, index))
}

fn place(board: &mut Board, index: usize) -> Coord {
    board.set_index(index, Some(Tile::new(SPAWN_VALUE)));
    Coord::from_index(index, board.side())
}
