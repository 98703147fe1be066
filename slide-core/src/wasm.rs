//! WASM bindings for slide-core
//!
//! Provides a JavaScript-friendly API for the game engine.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::{Coord, Direction, GameConfig, GameState};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
    revision: Rc<Cell<u32>>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game with `tileCount` cells. A missing seed draws one
    /// from system entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(tile_count: usize, seed: Option<u64>) -> Result<WasmGame, JsError> {
        let config = GameConfig {
            tile_count,
            seed,
            board: None,
        };
        let mut inner = GameState::new(config)?;

        // JS polls `revision()` instead of holding a callback.
        let revision = Rc::new(Cell::new(0));
        let counter = revision.clone();
        inner.subscribe(move || counter.set(counter.get().wrapping_add(1)));

        Ok(WasmGame { inner, revision })
    }

    /// Apply a swipe ("left", "right", "up", "down" or L/R/U/D).
    /// Returns false for an unknown direction.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, direction: &str) -> bool {
        match direction.parse::<Direction>() {
            Ok(direction) => {
                self.inner.apply(direction);
                true
            }
            Err(_) => false,
        }
    }

    /// Clear the board down to a single tile
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Board as a flat array of numbers, null for empty cells
    pub fn board(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.values())?)
    }

    /// Tile value at (row, col), 0 if empty
    #[wasm_bindgen(js_name = tileAt)]
    pub fn tile_at(&self, row: usize, col: usize) -> u32 {
        let side = self.inner.side_length();
        if row >= side || col >= side {
            return 0;
        }
        self.inner
            .board()
            .get(Coord::new(row, col))
            .map(|t| t.value())
            .unwrap_or(0)
    }

    #[wasm_bindgen(js_name = sideLength)]
    pub fn side_length(&self) -> usize {
        self.inner.side_length()
    }

    /// Number of state changes so far; bumps on every move and reset
    pub fn revision(&self) -> u32 {
        self.revision.get()
    }

    /// True when no cell is empty
    #[wasm_bindgen(js_name = isFull)]
    pub fn is_full(&self) -> bool {
        self.inner.board().is_full()
    }
}
