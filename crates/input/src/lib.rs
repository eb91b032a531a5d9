//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_tictactoe_types::GameAction`] values;
//! the game itself never sees raw key codes.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
