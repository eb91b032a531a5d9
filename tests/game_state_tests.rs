//! Game state tests - history bookkeeping, time travel, and status text

use tui_tictactoe::core::{GameState, Verdict};
use tui_tictactoe::types::{Player, SortOrder};

#[test]
fn test_first_move_scenario() {
    // Empty board -> play(0) as X.
    let mut game = GameState::new();
    assert!(game.play(0));

    assert_eq!(game.current_board().get(0), Some(Some(Player::X)));
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.status_text(), "Next player: O");
}

#[test]
fn test_row_win_scenario() {
    // X plays 0,1,2 (row 0) alternating with O at 3,4.
    let mut game = GameState::new();
    for cell in [0, 3, 1, 4, 2] {
        assert!(game.play(cell));
    }

    assert_eq!(
        game.verdict(),
        Verdict::Won {
            player: Player::X,
            line: [0, 1, 2],
        }
    );
    assert_eq!(game.status_text(), "Winner: X");
}

#[test]
fn test_draw_scenario() {
    // X: 0,1,5,6,8  O: 2,3,4,7 - full board, no line.
    let mut game = GameState::new();
    for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        assert!(game.play(cell));
    }

    assert_eq!(game.verdict(), Verdict::Draw);
    assert_eq!(game.status_text(), "Draw");
    assert!(!game.play(0));
}

#[test]
fn test_occupied_cell_never_changes_history() {
    let mut game = GameState::new();
    game.play(4);
    let len = game.history_len();
    let current = game.current_move();

    assert!(!game.play(4));
    assert_eq!(game.history_len(), len);
    assert_eq!(game.current_move(), current);
}

#[test]
fn test_play_after_verdict_is_noop() {
    let mut game = GameState::new();
    for cell in [0, 3, 1, 4, 2] {
        game.play(cell);
    }
    let len = game.history_len();

    assert!(!game.play(8));
    assert_eq!(game.history_len(), len);
    assert_eq!(game.current_move(), len - 1);
}

#[test]
fn test_jump_leaves_history_unchanged() {
    let mut game = GameState::new();
    game.play(0);
    game.play(1);
    game.play(2);
    let snapshots: Vec<_> = (0..game.history_len())
        .map(|i| {
            let mut clone = game.clone();
            clone.jump_to(i);
            *clone.current_board()
        })
        .collect();

    for k in 0..game.history_len() {
        assert!(game.jump_to(k));
        assert_eq!(game.current_move(), k);
        assert_eq!(game.history_len(), 4);
        assert_eq!(*game.current_board(), snapshots[k]);
    }
}

#[test]
fn test_truncate_on_replay_scenario() {
    // History=[empty, afterMove0, afterMove1], jumpTo(0), then play(5).
    let mut game = GameState::new();
    game.play(0);
    game.play(1);
    assert_eq!(game.history_len(), 3);

    assert!(game.jump_to(0));
    assert!(game.play(5));

    assert_eq!(game.history_len(), 2);
    assert_eq!(game.current_move(), 1);
    // The replacement ply belongs to X again.
    assert_eq!(game.current_board().get(5), Some(Some(Player::X)));
    assert_eq!(game.current_board().get(0), Some(None));
    assert_eq!(game.current_board().get(1), Some(None));
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = GameState::new();
    game.play(0);
    assert!(!game.jump_to(5));
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_jump_reopens_play_and_winner_can_change() {
    let mut game = GameState::new();
    // X is one ply from winning row 0.
    for cell in [0, 3, 1, 4] {
        game.play(cell);
    }
    game.play(2);
    assert_eq!(game.status_text(), "Winner: X");

    // Travel back and let the game take a different course.
    assert!(game.jump_to(4));
    assert_eq!(game.verdict(), Verdict::InProgress);
    assert!(game.play(8)); // X declines the win
    assert!(game.play(5)); // O completes 3,4,5
    assert_eq!(game.status_text(), "Winner: O");
    assert_eq!(game.verdict().winning_line(), Some([3, 4, 5]));
}

#[test]
fn test_move_descriptions_along_a_game() {
    let mut game = GameState::new();
    game.play(4);
    game.play(2);
    game.play(6);

    assert_eq!(game.move_description(0), "Go to game start");
    assert_eq!(game.move_description(1), "Go to move #1: Row 1 Col 1");
    assert_eq!(game.move_description(2), "Go to move #2: Row 0 Col 2");
    assert_eq!(game.move_description(3), "You are at move #3");
}

#[test]
fn test_move_description_at_game_start() {
    // With a single history entry, index 0 is also the latest entry.
    let game = GameState::new();
    assert_eq!(game.move_description(0), "You are at move #0");
}

#[test]
fn test_sort_toggle_is_presentation_only() {
    let mut game = GameState::new();
    game.play(0);
    game.play(1);
    let before = game.snapshot();

    game.toggle_sort();
    let after = game.snapshot();

    assert_eq!(after.sort_order, SortOrder::Descending);
    assert_eq!(after.cells, before.cells);
    assert_eq!(after.current_move, before.current_move);
    assert_eq!(after.move_count, before.move_count);
    assert_eq!(after.display_order().as_slice(), &[2, 1, 0]);
}

#[test]
fn test_full_game_snapshot_round() {
    let mut game = GameState::new();
    for cell in [0, 3, 1, 4, 2] {
        game.play(cell);
    }
    let snap = game.snapshot();
    assert_eq!(snap.move_count, 6);
    assert_eq!(snap.current_move, 5);
    assert_eq!(snap.last_moves.as_slice(), &[0, 3, 1, 4, 2]);
    assert_eq!(snap.winner, Some(Player::X));
    assert_eq!(snap.winning_line, Some([0, 1, 2]));
    assert_eq!(snap.status_text(), "Winner: X");
}
