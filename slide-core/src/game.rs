//! Game state: one board, one random source, change observers.

use std::fmt;

use rand::RngCore;

use crate::board::{exact_sqrt, Board};
use crate::config::{GameConfig, DEFAULT_SIDE};
use crate::error::GameError;
use crate::merge::{merge, MergeReport};
use crate::rng::SeededGenerator;
use crate::spawn::spawn_tile;
use crate::{Coord, Direction};

/// Handle returned by [`GameState::subscribe`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut()>;

/// Owns the board and the random source, and runs each move as
/// merge -> spawn -> notify.
///
/// The generator is never exposed, so the only way to advance it is
/// through [`apply`](GameState::apply), [`reset`](GameState::reset) and
/// construction.
pub struct GameState<R = SeededGenerator> {
    board: Board,
    rng: R,
    tile_count: usize,
    last_spawn: Option<Coord>,
    last_report: Option<MergeReport>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl GameState<SeededGenerator> {
    /// Build a game from a validated config, seeding from entropy when
    /// the config has no seed.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SeededGenerator::new(seed),
            None => SeededGenerator::from_entropy(),
        };
        GameState::with_rng(config.tile_count, config.initial_board()?, rng)
    }

    /// Standard 4x4 game from `seed`.
    pub fn seeded(seed: u64) -> Self {
        GameState::start(Board::with_side(DEFAULT_SIDE), SeededGenerator::new(seed))
    }
}

impl<R: RngCore> GameState<R> {
    /// Build a game around an explicit random source.
    ///
    /// An `initial` board with no tiles, or no board at all, gets one
    /// spawned tile.
    pub fn with_rng(tile_count: usize, initial: Option<Board>, rng: R) -> Result<Self, GameError> {
        if tile_count == 0 {
            return Err(GameError::EmptyBoard);
        }
        if exact_sqrt(tile_count).is_none() {
            return Err(GameError::NotPerfectSquare { tile_count });
        }
        let board = match initial {
            Some(board) if board.len() != tile_count => {
                return Err(GameError::BoardSizeMismatch {
                    expected: tile_count,
                    actual: board.len(),
                });
            }
            Some(board) => board,
            None => Board::empty(tile_count)?,
        };
        Ok(GameState::start(board, rng))
    }

    fn start(board: Board, rng: R) -> Self {
        let mut state = GameState {
            tile_count: board.len(),
            board,
            rng,
            last_spawn: None,
            last_report: None,
            observers: Vec::new(),
            next_subscription: 0,
        };
        if state.board.tile_count() == 0 {
            state.last_spawn = spawn_tile(&mut state.board, &mut state.rng);
        }
        state
    }

    /// Swipe in `direction`, spawn one tile, notify observers.
    ///
    /// A tile is spawned even when the swipe changed nothing. On a full
    /// board the spawn is skipped and [`last_spawn`](Self::last_spawn)
    /// returns `None`.
    pub fn apply(&mut self, direction: Direction) {
        log::debug!("merging {} along {:?}", direction, direction.axis());
        log::debug!("before: {:?}", self.board.values());
        let report = merge(&mut self.board, direction);
        log::debug!(
            "after: {:?} ({} slides, {} merges)",
            self.board.values(),
            report.slides,
            report.merges
        );

        self.last_report = Some(report);
        self.last_spawn = spawn_tile(&mut self.board, &mut self.rng);
        if self.last_spawn.is_none() {
            log::warn!("board full after {direction}, no tile spawned");
        }

        self.notify();
    }

    /// Clear the board and spawn a single tile, reusing the generator.
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_report = None;
        self.last_spawn = spawn_tile(&mut self.board, &mut self.rng);
        log::debug!("reset, spawned at {:?}", self.last_spawn);
        self.notify();
    }

    /// Register a callback fired after every `apply` and `reset`.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer();
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell values in row-major order, `None` for empty cells.
    pub fn values(&self) -> Vec<Option<u32>> {
        self.board.values()
    }

    #[inline]
    pub fn side_length(&self) -> usize {
        self.board.side()
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Where the most recent spawn landed, `None` if it was skipped.
    #[inline]
    pub fn last_spawn(&self) -> Option<Coord> {
        self.last_spawn
    }

    /// Outcome of the most recent merge; cleared by `reset`.
    #[inline]
    pub fn last_report(&self) -> Option<MergeReport> {
        self.last_report
    }
}

impl<R> fmt::Debug for GameState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board.values())
            .field("tile_count", &self.tile_count)
            .field("last_spawn", &self.last_spawn)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::spawn::SPAWN_VALUE;
    use crate::Tile;

    /// Pops outputs from the back of a list, then returns zeros.
    struct FixedPositionGenerator {
        options: Vec<u64>,
    }

    impl RngCore for FixedPositionGenerator {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.options.pop().unwrap_or(0)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.iter_mut().for_each(|b| *b = 0);
        }
    }

    fn total(game: &GameState<impl RngCore>) -> u64 {
        game.board().tile_sum()
    }

    #[test]
    fn test_starts_with_single_two() {
        let game = GameState::seeded(0);
        assert_eq!(total(&game), 2);
        assert_eq!(game.board().tile_count(), 1);
        assert_eq!(game.tile_count(), 16);
        assert_eq!(game.side_length(), 4);
        assert!(game.last_spawn().is_some());
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = GameState::seeded(0);
        let b = GameState::seeded(0);
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_different_seed_different_board() {
        let a = GameState::seeded(0);
        let b = GameState::seeded(1);
        assert_ne!(a.values(), b.values());
    }

    #[test]
    fn test_reset_single_tile() {
        let mut game = GameState::seeded(0);
        game.apply(Direction::Right);
        game.apply(Direction::Down);
        game.reset();
        assert_eq!(total(&game), 2);
        assert_eq!(game.board().tile_count(), 1);
        assert_eq!(game.last_report(), None);
    }

    #[test]
    fn test_reset_moves_the_tile() {
        let mut game = GameState::seeded(0);
        let before = game.values();
        game.reset();
        assert_ne!(before, game.values());
    }

    #[test]
    fn test_apply_adds_tile() {
        let mut game = GameState::seeded(0);
        game.apply(Direction::Right);
        assert_eq!(total(&game), 4);
    }

    #[test]
    fn test_apply_spawns_in_new_spot() {
        // Low draws land on index 0, the max draw on the last cell.
        let rng = FixedPositionGenerator {
            options: vec![u64::MAX, 3],
        };
        let mut game = GameState::with_rng(16, None, rng).unwrap();
        let before = game.values();
        game.apply(Direction::Right);
        let after = game.values();
        assert_ne!(before, after);
        assert_eq!(after.iter().filter(|v| v.is_some()).count(), 2);
    }

    #[test]
    fn test_apply_merges_matching_tiles() {
        let mut board = Board::empty(16).unwrap();
        board.set(Coord::new(0, 3), Some(Tile::new(2)));
        board.set(Coord::new(0, 2), Some(Tile::new(2)));
        let mut game = GameState::with_rng(16, Some(board), SeededGenerator::new(0)).unwrap();
        game.apply(Direction::Right);
        assert_eq!(game.board().get(Coord::new(0, 3)), Some(Tile::new(4)));
        assert_eq!(game.last_report().map(|r| r.merges), Some(1));
    }

    #[test]
    fn test_initial_board_kept_when_occupied() {
        let board = Board::from_values(&[Some(4), None, None, None]).unwrap();
        let game = GameState::with_rng(4, Some(board), SeededGenerator::new(0)).unwrap();
        assert_eq!(game.values(), vec![Some(4), None, None, None]);
        assert_eq!(game.last_spawn(), None);
    }

    #[test]
    fn test_empty_initial_board_gets_spawn() {
        let board = Board::empty(9).unwrap();
        let game = GameState::with_rng(9, Some(board), SeededGenerator::new(0)).unwrap();
        assert_eq!(game.board().tile_count(), 1);
    }

    #[test]
    fn test_rejects_bad_tile_count() {
        let err = GameState::with_rng(15, None, SeededGenerator::new(0)).unwrap_err();
        assert!(matches!(err, GameError::NotPerfectSquare { tile_count: 15 }));
        let err = GameState::with_rng(0, None, SeededGenerator::new(0)).unwrap_err();
        assert!(matches!(err, GameError::EmptyBoard));
    }

    #[test]
    fn test_rejects_board_mismatch() {
        let board = Board::empty(9).unwrap();
        let err = GameState::with_rng(16, Some(board), SeededGenerator::new(0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::BoardSizeMismatch {
                expected: 16,
                actual: 9
            }
        ));
    }

    #[test]
    fn test_full_board_skips_spawn() {
        let board = Board::from_values(&[Some(2), Some(4), Some(8), Some(16)]).unwrap();
        let mut game = GameState::with_rng(4, Some(board), SeededGenerator::new(0)).unwrap();
        game.apply(Direction::Left);
        assert_eq!(game.last_spawn(), None);
        assert_eq!(game.values(), vec![Some(2), Some(4), Some(8), Some(16)]);
    }

    #[test]
    fn test_observers_notified() {
        let count = Rc::new(Cell::new(0));
        let mut game = GameState::seeded(3);
        let seen = count.clone();
        let id = game.subscribe(move || seen.set(seen.get() + 1));

        game.apply(Direction::Up);
        game.reset();
        assert_eq!(count.get(), 2);

        assert!(game.unsubscribe(id));
        assert!(!game.unsubscribe(id));
        game.apply(Direction::Down);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_new_from_config() {
        let config = GameConfig::default().with_tile_count(25).with_seed(8);
        let game = GameState::new(config).unwrap();
        assert_eq!(game.side_length(), 5);
        assert_eq!(game.board().tile_count(), 1);
        assert_eq!(game.board().max_value(), Some(SPAWN_VALUE));
    }

    #[test]
    fn test_new_without_seed() {
        let game = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(game.board().tile_count(), 1);
    }
}
