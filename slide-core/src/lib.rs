//! Sliding-tile merge engine (2048 family) with deterministic tile spawning.
//!
//! # Board Layout
//!
//! ```text
//! A board of side N holds N*N cells in row-major order:
//!
//!   (0,0)=0      (0,1)=1      ...  (0,N-1)=N-1
//!   (1,0)=N      (1,1)=N+1    ...
//!   ...
//!   (N-1,0)      ...               (N-1,N-1)=N*N-1
//!
//! index = row * N + col
//! ```
//!
//! # Move Pipeline
//!
//! ```text
//! GameState::apply(dir)
//!   -> merge::merge(board, dir)      slide + merge + compact, in place
//!   -> spawn::spawn_tile(board, rng) one 2-valued tile on an empty cell
//!   -> observers notified            no payload, re-read the board
//! ```
//!
//! The random source is a seeded 64-bit LCG ([`SeededGenerator`]), so two
//! games built from the same seed walk through identical states.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod merge;
pub mod rng;
pub mod spawn;
pub mod tile;
pub mod traversal;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameState, SubscriptionId};
pub use merge::{merge, slide_preview, MergeReport};
pub use rng::SeededGenerator;
pub use spawn::{spawn_tile, SPAWN_VALUE};
pub use tile::Tile;
pub use traversal::ordered_coordinates;

/// Axis along which a move slides tiles.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rows are independent lines (left/right moves).
    Horizontal,
    /// Columns are independent lines (up/down moves).
    Vertical,
}

/// Swipe direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The axis this direction slides along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// All four directions.
    pub fn all() -> impl Iterator<Item = Direction> {
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down].into_iter()
    }

    /// Single-letter notation used by the replay tool ("L", "R", "U", "D").
    pub fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }

    /// Parse a single notation letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(direction) = Direction::from_letter(c) {
                return Ok(direction);
            }
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(GameError::UnknownDirection(s.to_string())),
        }
    }
}

/// Zero-based (row, column) position on a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Flat row-major index on a board of the given side length.
    #[inline]
    pub fn index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub fn from_index(index: usize, side: usize) -> Coord {
        Coord {
            row: index / side,
            col: index % side,
        }
    }

    /// True if both coordinates belong to the same line for `axis`
    /// (same row when horizontal, same column when vertical).
    #[inline]
    pub fn same_line(self, other: Coord, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.row == other.row,
            Axis::Vertical => self.col == other.col,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
