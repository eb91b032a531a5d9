//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same action sequence always produces the same
//!   session
//! - **Testable**: every rule and history transition has unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: one 3x3 board snapshot; 9 cells plus separate last-move
//!   metadata
//! - [`rules`]: the win/draw evaluator over the 8 fixed winning triples
//! - [`game_state`]: history of snapshots, the move pointer, and time travel
//! - [`snapshot`]: plain render data handed to the view layer
//!
//! # Game Rules
//!
//! - X moves first; players alternate on every accepted ply
//! - A play on an occupied cell, or on a decided board, is a silent no-op
//! - Jumping to an earlier move reopens play from that snapshot; the next
//!   accepted play discards all later snapshots before appending
//! - The move list can be displayed ascending or descending; sort order is
//!   pure presentation state
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_core::rules::Verdict;
//! use tui_tictactoe_types::Player;
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     assert!(game.play(cell));
//! }
//!
//! // X completed row 0.
//! assert_eq!(game.status_text(), "Winner: X");
//! assert_eq!(game.verdict().winner(), Some(Player::X));
//!
//! // Time travel back before the winning ply.
//! assert!(game.jump_to(4));
//! assert_eq!(game.verdict(), Verdict::InProgress);
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rules::{evaluate, Verdict};
pub use snapshot::GameSnapshot;
