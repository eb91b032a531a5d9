//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play. It
//! avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render purely from a [`core::GameSnapshot`] (no live state access)
//! - Restore the terminal reliably, even when the event loop errors

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
