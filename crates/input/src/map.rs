//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_tictactoe_types::{GameAction, CELL_COUNT};

/// Map keyboard input to game actions.
///
/// Digits 1-9 play a cell directly (reading order, row-major from the top
/// left). Everything else steers the cursor, the history pointer, or the
/// move-list presentation.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::CursorRight)
        }

        // Play
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char(c @ '1'..='9') => {
            let cell = (c as usize) - ('1' as usize);
            debug_assert!(cell < CELL_COUNT);
            Some(GameAction::Play(cell))
        }

        // History time travel
        KeyCode::Char('[') | KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::JumpBack),
        KeyCode::Char(']') => Some(GameAction::JumpForward),
        KeyCode::Char('g') => Some(GameAction::JumpStart),
        KeyCode::Char('G') => Some(GameAction::JumpLatest),

        // Presentation
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::ToggleSort),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::CursorDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::CursorRight)
        );
    }

    #[test]
    fn test_place_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Place)
        );
    }

    #[test]
    fn test_digit_keys_map_to_cells_in_reading_order() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::Play(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(GameAction::Play(4))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::Play(8))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(GameAction::JumpBack)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(']'))),
            Some(GameAction::JumpForward)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(GameAction::JumpStart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('G'))),
            Some(GameAction::JumpLatest)
        );
    }

    #[test]
    fn test_sort_and_restart_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(GameAction::ToggleSort)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
