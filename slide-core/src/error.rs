/// Errors raised while building or configuring a game.
///
/// Merge-time invariant violations (coordinates off the board) are not
/// represented here; they panic.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("tile count {tile_count} is not a perfect square")]
    NotPerfectSquare { tile_count: usize },

    #[error("tile count must be positive")]
    EmptyBoard,

    #[error("initial board has {actual} cells, expected {expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_perfect_square_display() {
        let err = GameError::NotPerfectSquare { tile_count: 15 };
        assert_eq!(err.to_string(), "tile count 15 is not a perfect square");
    }

    #[test]
    fn test_board_size_mismatch_display() {
        let err = GameError::BoardSizeMismatch {
            expected: 16,
            actual: 9,
        };
        assert_eq!(err.to_string(), "initial board has 9 cells, expected 16");
    }

    #[test]
    fn test_unknown_direction_display() {
        let err = GameError::UnknownDirection("north".to_string());
        assert_eq!(err.to_string(), "unknown direction: \"north\"");
    }
}
