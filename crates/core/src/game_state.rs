//! Game state module - history bookkeeping and the two-state machine
//!
//! `GameState` owns the ordered history of board snapshots and the current
//! move pointer, and delegates legality to the rules evaluator. A decided
//! board (won or drawn) rejects further plays but still accepts history
//! jumps; jumping back to an in-progress snapshot reopens play from there,
//! and the next accepted play discards every later snapshot.

use crate::board::Board;
use crate::rules::{evaluate, Verdict};
use crate::snapshot::GameSnapshot;
use tui_tictactoe_types::{row_col, GameAction, Player, SortOrder, GRID_SIDE};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board snapshots, index 0 = empty initial board. Never empty.
    history: Vec<Board>,
    /// Pointer into `history`; always `< history.len()`.
    current: usize,
    sort_order: SortOrder,
    /// Cell targeted by the next `Place` action
    cursor: usize,
}

impl GameState {
    /// Create a fresh session: one empty board, X to move
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
            sort_order: SortOrder::default(),
            cursor: GRID_SIDE * GRID_SIDE / 2,
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_move(&self) -> usize {
        self.current
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Even pointer means X to move
    pub fn x_is_next(&self) -> bool {
        self.current % 2 == 0
    }

    pub fn next_player(&self) -> Player {
        if self.x_is_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// The board the pointer selects for display and legality checks
    pub fn current_board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Evaluate the displayed board
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Play the active player's mark at `cell`.
    ///
    /// Silent no-op (returns `false`) when the displayed board is already
    /// decided or `cell` is occupied or out of bounds. Otherwise the history
    /// is truncated to the pointer, the new snapshot appended, and the
    /// pointer advanced to it.
    pub fn play(&mut self, cell: usize) -> bool {
        if !self.verdict().is_in_progress() {
            return false;
        }

        let mut next = *self.current_board();
        if !next.place(cell, self.next_player()) {
            return false;
        }

        // Playing after a jump back discards the abandoned future first.
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;
        true
    }

    /// Move the pointer to an existing snapshot.
    ///
    /// Returns `false` for an out-of-range index; history is never altered.
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            return false;
        }
        self.current = move_index;
        true
    }

    /// Flip the move-list display order
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Discard the session and start over
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Move the cursor by (row delta, column delta), wrapping at the edges
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let side = GRID_SIDE as isize;
        let (row, col) = row_col(self.cursor);
        let row = (row as isize + d_row).rem_euclid(side) as usize;
        let col = (col as isize + d_col).rem_euclid(side) as usize;
        self.cursor = row * GRID_SIDE + col;
    }

    /// Status line for the displayed board
    pub fn status_text(&self) -> String {
        self.snapshot().status_text()
    }

    /// Text for one entry of the move-history list
    pub fn move_description(&self, index: usize) -> String {
        self.snapshot().move_description(index)
    }

    /// Apply one user action.
    ///
    /// Returns whether visible state changed, so callers can skip redraws
    /// for rejected inputs.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => {
                self.move_cursor(-1, 0);
                true
            }
            GameAction::CursorDown => {
                self.move_cursor(1, 0);
                true
            }
            GameAction::CursorLeft => {
                self.move_cursor(0, -1);
                true
            }
            GameAction::CursorRight => {
                self.move_cursor(0, 1);
                true
            }
            GameAction::Place => self.play(self.cursor),
            GameAction::Play(cell) => self.play(cell),
            GameAction::JumpBack => self.current > 0 && self.jump_to(self.current - 1),
            GameAction::JumpForward => self.jump_to(self.current + 1),
            GameAction::JumpStart => {
                let moved = self.current != 0;
                self.jump_to(0) && moved
            }
            GameAction::JumpLatest => {
                let latest = self.history.len() - 1;
                let moved = self.current != latest;
                self.jump_to(latest) && moved
            }
            GameAction::ToggleSort => {
                self.toggle_sort();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill an existing snapshot from the current state (no allocation
    /// beyond the caller's snapshot)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.current_board();
        board.write_u8_cells(&mut out.cells);

        let verdict = evaluate(board);
        out.winning_line = verdict.winning_line();
        out.winner = verdict.winner();
        out.draw = verdict == Verdict::Draw;
        out.x_is_next = self.x_is_next();
        out.cursor = self.cursor;
        out.current_move = self.current;
        out.move_count = self.history.len();
        out.last_moves.clear();
        for snapshot in &self.history[1..] {
            // Every non-initial snapshot was produced by `place`.
            out.last_moves.push(snapshot.last_move().unwrap_or(0) as u8);
        }
        out.sort_order = self.sort_order;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
