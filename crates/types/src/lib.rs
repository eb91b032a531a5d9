//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI rendering, tests).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored in row-major reading order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! For a linear index `i`, row is `i / 3` and column is `i % 3`.
//!
//! # Winning Triples
//!
//! [`WINNING_LINES`] enumerates the 8 fixed index triples (3 rows, 3 columns,
//! 2 diagonals). Enumeration order is significant: the evaluator reports the
//! first completed triple in this order.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Player, GameAction, CELL_COUNT, row_col};
//!
//! assert_eq!(Player::X.opponent(), Player::O);
//! assert_eq!(CELL_COUNT, 9);
//! assert_eq!(row_col(5), (1, 2));
//!
//! let action = GameAction::Play(4);
//! assert!(matches!(action, GameAction::Play(4)));
//! ```

/// Grid side length (3 cells)
pub const GRID_SIDE: usize = 3;

/// Total number of playable cells (9)
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Maximum history length: the empty initial board plus one entry per ply
pub const HISTORY_CAP: usize = CELL_COUNT + 1;

/// The 8 fixed winning triples: 3 rows, 3 columns, 2 diagonals.
///
/// The anti-diagonal is listed before the main diagonal, matching the
/// evaluator's defined tie-break order for inconsistently seeded boards.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [2, 4, 6],
    [0, 4, 8],
];

/// Derive (row, column) from a linear cell index.
///
/// # Examples
///
/// ```
/// use tui_tictactoe_types::row_col;
///
/// assert_eq!(row_col(0), (0, 0));
/// assert_eq!(row_col(4), (1, 1));
/// assert_eq!(row_col(8), (2, 2));
/// ```
#[inline]
pub const fn row_col(index: usize) -> (usize, usize) {
    (index / GRID_SIDE, index % GRID_SIDE)
}

/// The two players
///
/// X always moves first; players alternate on every accepted ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark drawn on the board for this player
    pub fn mark(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Uppercase string representation ("X" or "O")
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell claimed by the given player
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<Player>;

/// Display order of the move-history list
///
/// Pure presentation state: toggling it never changes game semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Game start first (the default)
    Ascending,
    /// Latest move first
    Descending,
}

impl SortOrder {
    /// The opposite order
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::SortOrder;
    ///
    /// assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    /// assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    /// ```
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and consumed by
/// `GameState::apply_action`. Each action maps to a specific interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cell cursor one row up (wraps)
    CursorUp,
    /// Move the cell cursor one row down (wraps)
    CursorDown,
    /// Move the cell cursor one column left (wraps)
    CursorLeft,
    /// Move the cell cursor one column right (wraps)
    CursorRight,
    /// Play the cell under the cursor
    Place,
    /// Play a specific cell by linear index (digit keys)
    Play(usize),
    /// Jump one move back in history
    JumpBack,
    /// Jump one move forward in history
    JumpForward,
    /// Jump to the game start (move 0)
    JumpStart,
    /// Jump to the latest move
    JumpLatest,
    /// Flip the move-list display order
    ToggleSort,
    /// Start a fresh game
    Restart,
}
