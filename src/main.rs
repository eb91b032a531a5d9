//! Terminal tic-tac-toe runner (default binary).
//!
//! Event-driven and fully synchronous: each key event triggers at most one
//! state transition, then the screen is redrawn from a fresh snapshot.
//! There is no tick, no timers, and no background work.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit};
use tui_tictactoe::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    // Rejected inputs (occupied cell, decided game,
                    // out-of-range jump) leave the state untouched; the
                    // redraw is then a no-op frame.
                    game.apply_action(action);
                }
            }
            Event::Resize(..) => {
                // Next loop iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}
