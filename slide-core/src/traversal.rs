//! Scan order for each swipe direction.
//!
//! ```text
//! Right: (0,0) (0,1) .. (0,N-1) (1,0) ..        rows, columns ascending
//! Left:  (0,N-1) .. (0,0) (1,N-1) ..            rows, columns descending
//! Down:  (0,0) (1,0) .. (N-1,0) (0,1) ..        columns, rows ascending
//! Up:    (N-1,0) .. (0,0) (N-1,1) ..            columns, rows descending
//! ```
//!
//! Each line ends at the edge tiles slide toward. The merge engine walks
//! the sequence backwards, so it meets that edge first on every line.

use crate::{Coord, Direction};

/// Every board coordinate in the scan order for `direction`.
pub fn ordered_coordinates(side: usize, direction: Direction) -> Vec<Coord> {
    let mut coords = Vec::with_capacity(side * side);
    for line in 0..side {
        match direction {
            Direction::Right => coords.extend((0..side).map(|col| Coord::new(line, col))),
            Direction::Left => coords.extend((0..side).rev().map(|col| Coord::new(line, col))),
            Direction::Down => coords.extend((0..side).map(|row| Coord::new(row, line))),
            Direction::Up => coords.extend((0..side).rev().map(|row| Coord::new(row, line))),
        }
    }
    coords
}

/// Position of `coord` along its line, counted from the edge tiles slide
/// toward (0 = on that edge).
#[inline]
pub fn distance_to_edge(coord: Coord, side: usize, direction: Direction) -> usize {
    match direction {
        Direction::Right => side - 1 - coord.col,
        Direction::Left => coord.col,
        Direction::Down => side - 1 - coord.row,
        Direction::Up => coord.row,
    }
}
