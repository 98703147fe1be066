//! Game configuration, loadable from TOML.
//!
//! ```toml
//! tile_count = 25
//! seed = 42
//! # optional explicit start position, 0 = empty cell
//! board = [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{exact_sqrt, Board};
use crate::error::GameError;

/// Side of a standard board.
pub const DEFAULT_SIDE: usize = 4;

/// Cells on a standard board.
pub const DEFAULT_TILE_COUNT: usize = DEFAULT_SIDE * DEFAULT_SIDE;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Number of cells; must be a perfect square.
    pub tile_count: usize,
    /// Seed for the tile spawner. `None` draws one from system entropy.
    pub seed: Option<u64>,
    /// Optional start position, row-major, `0` for an empty cell.
    pub board: Option<Vec<u32>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_count: DEFAULT_TILE_COUNT,
            seed: None,
            board: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<GameConfig, GameError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> GameConfig {
        self.seed = Some(seed);
        self
    }

    pub fn with_tile_count(mut self, tile_count: usize) -> GameConfig {
        self.tile_count = tile_count;
        self
    }

    /// Check the tile count and the start position against each other.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tile_count == 0 {
            return Err(GameError::EmptyBoard);
        }
        if exact_sqrt(self.tile_count).is_none() {
            return Err(GameError::NotPerfectSquare {
                tile_count: self.tile_count,
            });
        }
        if let Some(cells) = &self.board {
            if cells.len() != self.tile_count {
                return Err(GameError::BoardSizeMismatch {
                    expected: self.tile_count,
                    actual: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Start position as a [`Board`], if one was configured.
    pub fn initial_board(&self) -> Result<Option<Board>, GameError> {
        self.board
            .as_ref()
            .map(|cells| {
                let values: Vec<Option<u32>> =
                    cells.iter().map(|&v| (v != 0).then_some(v)).collect();
                Board::from_values(&values)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal() {
        let config = GameConfig::from_toml_str("seed = 9").unwrap();
        assert_eq!(config.tile_count, 16);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.board, None);
    }

    #[test]
    fn test_parse_with_board() {
        let config = GameConfig::from_toml_str(
            "tile_count = 4\nseed = 1\nboard = [2, 0, 0, 4]\n",
        )
        .unwrap();
        let board = config.initial_board().unwrap().unwrap();
        assert_eq!(board.values(), vec![Some(2), None, None, Some(4)]);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = GameConfig::from_toml_str("tile_count = 10").unwrap_err();
        assert!(matches!(err, GameError::NotPerfectSquare { tile_count: 10 }));
    }

    #[test]
    fn test_rejects_board_mismatch() {
        let err = GameConfig::from_toml_str("tile_count = 9\nboard = [0, 2, 0, 0]").unwrap_err();
        assert!(matches!(
            err,
            GameError::BoardSizeMismatch {
                expected: 9,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = GameConfig::from_toml_str("tiles = 16").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default().with_tile_count(25).with_seed(3);
        assert_eq!(config.tile_count, 25);
        assert_eq!(config.seed, Some(3));
    }
}
