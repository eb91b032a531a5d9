//! Board module - a single immutable-by-convention board snapshot
//!
//! The board holds the 9 semantic cells in a flat array plus the linear index
//! of the last move played. The two are deliberately separate fields: the
//! evaluator and the renderer only ever read the 9 cells, while the history
//! list reads the metadata to describe each ply. The metadata must never
//! occupy a slot of the cell array.

use tui_tictactoe_types::{Cell, Player, CELL_COUNT};

/// One 3x3 board snapshot with last-move metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells in row-major reading order
    cells: [Cell; CELL_COUNT],
    /// Linear index of the move that produced this snapshot.
    ///
    /// `None` only for the initial empty board.
    last_move: Option<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            last_move: None,
        }
    }

    /// Get cell at linear index
    ///
    /// Returns `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if a cell is playable (within bounds and empty)
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Check if a cell is occupied (within bounds and marked)
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }

    /// Place a mark and record the move metadata
    ///
    /// Returns `false` if the index is out of bounds or the cell is occupied;
    /// the board is unchanged in that case.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.cells[index] = Some(player);
        self.last_move = Some(index);
        true
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The 9 semantic cells
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Linear index of the move that produced this snapshot
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Write the cells as `u8` values (0 empty, 1 X, 2 O) into `out`.
    ///
    /// This is the allocation-free export used by the render snapshot.
    pub fn write_u8_cells(&self, out: &mut [u8; CELL_COUNT]) {
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = match cell {
                None => 0,
                Some(Player::X) => 1,
                Some(Player::O) => 2,
            };
        }
    }

    /// Build a board directly from cells, for test setups
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self {
            cells,
            last_move: None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
