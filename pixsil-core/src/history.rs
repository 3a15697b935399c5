//! Bounded undo/redo history of full grid snapshots.
//!
//! Snapshots are whole-grid clones, O(width * height) each. Acceptable at the
//! supported grid sizes; revisit if the 128-cell bound is ever raised.

use crate::grid::Grid;

/// Maximum retained snapshots; the oldest is evicted beyond this.
pub const HISTORY_CAP: usize = 50;

/// Undo/redo stacks of grid snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<Grid>,
    redo: Vec<Grid>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the grid before a mutation.
    ///
    /// Always clears the redo stack. The snapshot itself is skipped when it
    /// would duplicate the most recent one.
    pub fn checkpoint(&mut self, grid: &Grid) {
        self.redo.clear();
        if self.undo.last() == Some(grid) {
            return;
        }
        if self.undo.len() == HISTORY_CAP {
            self.undo.remove(0);
        }
        self.undo.push(grid.clone());
    }

    /// Swap the grid back to the most recent snapshot.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };
        self.redo.push(std::mem::replace(grid, previous));
        true
    }

    /// Reapply the most recently undone state.
    ///
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(std::mem::replace(grid, next));
        true
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
