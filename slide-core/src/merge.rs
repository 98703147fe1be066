//! Slide, merge and compact tiles along one axis.
//!
//! One routine handles all four directions. It walks
//! [`ordered_coordinates`] backwards, which visits each line starting at
//! the edge tiles slide toward, and keeps two pieces of state per line:
//!
//! - `last_tile`: the most recently settled tile that can still absorb an
//!   equal neighbour.
//! - `empties`: free slots seen so far on this line, nearest to the target
//!   edge first.
//!
//! A tile first drops into the nearest free slot, then merges with
//! `last_tile` if the values match. A merged tile clears `last_tile`, so it
//! can't absorb a third tile in the same move.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::traversal::{distance_to_edge, ordered_coordinates};
use crate::{Coord, Direction};

/// What a single [`merge`] call did to the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MergeReport {
    /// Tiles that slid into a free slot.
    pub slides: usize,
    /// Pairs of tiles combined.
    pub merges: usize,
}

impl MergeReport {
    /// True if the board changed.
    #[inline]
    pub fn moved(&self) -> bool {
        self.slides > 0 || self.merges > 0
    }
}

/// Apply a swipe in `direction` to `board`, in place.
///
/// # Panics
/// If the traversal yields a coordinate outside the board.
pub fn merge(board: &mut Board, direction: Direction) -> MergeReport {
    let side = board.side();
    let axis = direction.axis();
    let mut report = MergeReport::default();

    let mut last_tile: Option<Coord> = None;
    let mut empties: Vec<Coord> = Vec::with_capacity(side);

    for current in ordered_coordinates(side, direction).into_iter().rev() {
        let mut position = current;

        // New line: forget everything from the previous one.
        if !last_tile.is_some_and(|last| last.same_line(position, axis)) {
            last_tile = None;
        }
        empties.retain(|e| e.same_line(position, axis));
        empties.sort_by_key(|e| distance_to_edge(*e, side, direction));

        let Some(tile) = board.get(position) else {
            empties.push(position);
            continue;
        };

        if !empties.is_empty() {
            let target = empties.remove(0);
            board.set(position, None);
            board.set(target, Some(tile));
            empties.push(position);
            position = target;
            report.slides += 1;
        }

        let Some(previous) = last_tile else {
            last_tile = Some(position);
            continue;
        };

        match board.get(previous) {
            Some(settled) if settled.can_merge(tile) => {
                board.set(previous, Some(tile.merge(settled)));
                board.set(position, None);
                last_tile = None;
                empties.insert(0, position);
                report.merges += 1;
            }
            _ => last_tile = Some(position),
        }
    }

    report
}

/// Board that a swipe would produce, leaving `board` untouched.
pub fn slide_preview(board: &Board, direction: Direction) -> Board {
    let mut next = board.clone();
    merge(&mut next, direction);
    next
}
