//! Square board of optional tiles, stored flat in row-major order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::{Coord, Tile};

/// Fixed-size square grid of `Option<Tile>`.
///
/// The cell count is always a perfect square; the side length is derived
/// from it once at construction.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Tile>>", into = "Vec<Option<Tile>>")]
pub struct Board {
    cells: Vec<Option<Tile>>,
    side: usize,
}

/// Integer square root, `None` unless `n` is a perfect square.
pub fn exact_sqrt(n: usize) -> Option<usize> {
    let mut root = (n as f64).sqrt() as usize;
    // Float rounding can land one off in either direction for large n.
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    (root * root == n).then_some(root)
}

impl Board {
    /// All-empty board with `len` cells.
    pub fn empty(len: usize) -> Result<Board, GameError> {
        Board::from_cells(vec![None; len])
    }

    /// All-empty `side` x `side` board.
    ///
    /// # Panics
    /// If `side` is zero.
    pub fn with_side(side: usize) -> Board {
        assert!(side > 0, "board side must be positive");
        Board {
            cells: vec![None; side * side],
            side,
        }
    }

    /// Board from a flat row-major cell list.
    pub fn from_cells(cells: Vec<Option<Tile>>) -> Result<Board, GameError> {
        if cells.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        let side = exact_sqrt(cells.len()).ok_or(GameError::NotPerfectSquare {
            tile_count: cells.len(),
        })?;
        Ok(Board { cells, side })
    }

    /// Board from raw values, `None` meaning an empty cell.
    pub fn from_values(values: &[Option<u32>]) -> Result<Board, GameError> {
        Board::from_cells(values.iter().map(|v| v.map(Tile::new)).collect())
    }

    /// Side length N.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Cell values in row-major order.
    pub fn values(&self) -> Vec<Option<u32>> {
        self.cells.iter().map(|c| c.map(Tile::value)).collect()
    }

    /// Flat index for `coord`.
    ///
    /// # Panics
    /// If `coord` lies outside the board. Only a broken traversal can
    /// produce such a coordinate, so there is nothing to recover.
    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            coord.row < self.side && coord.col < self.side,
            "coordinate {} outside {}x{} board",
            coord,
            self.side,
            self.side
        );
        coord.index(self.side)
    }

    /// Tile at `coord`, if any. Panics if `coord` is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.cells[self.index_of(coord)]
    }

    /// Overwrite the cell at `coord`. Panics if `coord` is off the board.
    #[inline]
    pub fn set(&mut self, coord: Coord, tile: Option<Tile>) {
        let index = self.index_of(coord);
        self.cells[index] = tile;
    }

    /// Remove and return the tile at `coord`.
    #[inline]
    pub fn take(&mut self, coord: Coord) -> Option<Tile> {
        let index = self.index_of(coord);
        self.cells[index].take()
    }

    /// Tile at a flat index, `None` if empty or out of range.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<Tile> {
        self.cells.get(index).copied().flatten()
    }

    #[inline]
    pub fn is_occupied_index(&self, index: usize) -> bool {
        self.get_index(index).is_some()
    }

    pub(crate) fn set_index(&mut self, index: usize, tile: Option<Tile>) {
        self.cells[index] = tile;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Flat indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Coordinates of the empty cells in row-major order.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.empty_indices()
            .into_iter()
            .map(|i| Coord::from_index(i, self.side))
            .collect()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Sum of all tile values, widened so it cannot overflow.
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .map(|t| u64::from(t.value()))
            .sum()
    }

    /// Highest tile value on the board, if any tile is present.
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().map(|t| t.value()).max()
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Tile>> + '_ {
        self.cells[row * self.side..(row + 1) * self.side].iter().copied()
    }

    /// Iterate over the cells of one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<Tile>> + '_ {
        (0..self.side).map(move |row| self.cells[row * self.side + col])
    }
}

impl TryFrom<Vec<Option<Tile>>> for Board {
    type Error = GameError;

    fn try_from(cells: Vec<Option<Tile>>) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for Vec<Option<Tile>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Text grid, empty cells shown as `.`, columns right-aligned.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .max_value()
            .map(|v| v.to_string().len())
            .unwrap_or(1);
        for row in 0..self.side {
            for (col, cell) in self.row(row).enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>width$}", tile.value(), width = width)?,
                    None => write!(f, "{:>width$}", ".", width = width)?,
                }
            }
            if row + 1 < self.side {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
