//! Render snapshot - plain data handed to the view layer
//!
//! `GameState` mutation produces a fresh snapshot; the view re-renders from
//! the latest one and never touches live state. The snapshot is heap-free:
//! fixed arrays for the cells and an `ArrayVec` for the per-ply move
//! metadata (history can never exceed one entry per cell).

use arrayvec::ArrayVec;
use tui_tictactoe_types::{row_col, Player, SortOrder, CELL_COUNT, HISTORY_CAP};

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Displayed cells (0 empty, 1 X, 2 O), row-major
    pub cells: [u8; CELL_COUNT],
    /// Completed triple to highlight, if the displayed board is won
    pub winning_line: Option<[usize; 3]>,
    pub winner: Option<Player>,
    pub draw: bool,
    /// Whether X moves next from the displayed board
    pub x_is_next: bool,
    /// Cell the next `Place` action targets
    pub cursor: usize,
    /// History pointer of the displayed board
    pub current_move: usize,
    /// History length (snapshots, including the empty initial board)
    pub move_count: usize,
    /// Last-move cell index for each ply 1..move_count
    pub last_moves: ArrayVec<u8, CELL_COUNT>,
    pub sort_order: SortOrder,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [0u8; CELL_COUNT];
        self.winning_line = None;
        self.winner = None;
        self.draw = false;
        self.x_is_next = true;
        self.cursor = CELL_COUNT / 2;
        self.current_move = 0;
        self.move_count = 1;
        self.last_moves.clear();
        self.sort_order = SortOrder::default();
    }

    /// Whether the displayed board still accepts plays
    pub fn playable(&self) -> bool {
        self.winner.is_none() && !self.draw
    }

    /// Status line over the board.
    ///
    /// One of `"Winner: <X|O>"`, `"Draw"`, or `"Next player: <X|O>"`.
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.winner {
            format!("Winner: {}", winner.as_str())
        } else if self.draw {
            "Draw".to_string()
        } else if self.x_is_next {
            "Next player: X".to_string()
        } else {
            "Next player: O".to_string()
        }
    }

    /// Text for one entry of the move-history list.
    ///
    /// The latest entry reads `"You are at move #N"` (it is the current
    /// position even when N is 0), index 0 reads `"Go to game start"`, and
    /// every other entry names the ply's row and column.
    pub fn move_description(&self, index: usize) -> String {
        if index + 1 == self.move_count {
            format!("You are at move #{index}")
        } else if index == 0 {
            "Go to game start".to_string()
        } else {
            let (row, col) = row_col(usize::from(self.last_moves[index - 1]));
            format!("Go to move #{index}: Row {row} Col {col}")
        }
    }

    /// History indices in display order per the current sort setting
    pub fn display_order(&self) -> ArrayVec<usize, HISTORY_CAP> {
        let mut order: ArrayVec<usize, HISTORY_CAP> = (0..self.move_count).collect();
        if self.sort_order == SortOrder::Descending {
            order.reverse();
        }
        order
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            cells: [0u8; CELL_COUNT],
            winning_line: None,
            winner: None,
            draw: false,
            x_is_next: true,
            cursor: CELL_COUNT / 2,
            current_move: 0,
            move_count: 1,
            last_moves: ArrayVec::new(),
            sort_order: SortOrder::default(),
        };
        snapshot.clear();
        snapshot
    }
}
