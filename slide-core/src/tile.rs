//! Numbered tile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numbered tile. Equality is by value only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile {
    value: u32,
}

impl Tile {
    #[inline]
    pub const fn new(value: u32) -> Tile {
        Tile { value }
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.value
    }

    /// Two tiles merge iff their values are equal.
    #[inline]
    pub fn can_merge(self, other: Tile) -> bool {
        self.value == other.value
    }

    /// Combine two tiles into one holding the raw sum of both values.
    ///
    /// Saturates at `u32::MAX`.
    #[inline]
    pub fn merge(self, other: Tile) -> Tile {
        Tile {
            value: self.value.saturating_add(other.value),
        }
    }
}

impl From<u32> for Tile {
    fn from(value: u32) -> Self {
        Tile::new(value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
