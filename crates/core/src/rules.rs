//! Rules module - the win/draw evaluator
//!
//! A single pass over the 8 fixed winning triples classifies any board as
//! in progress, drawn, or won. Occupied cells are tracked incrementally while
//! the triples are scanned, so the draw check needs no second full scan.

use crate::board::Board;
use tui_tictactoe_types::{Player, CELL_COUNT, WINNING_LINES};

/// Verdict of the evaluator for one board snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No line complete, at least one empty cell remains
    InProgress,
    /// No line complete, zero empty cells remain
    Draw,
    /// A completed line exists
    Won {
        player: Player,
        /// The completed triple of cell indices
        line: [usize; 3],
    },
}

impl Verdict {
    /// Whether further plays are accepted on this board
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Verdict::InProgress)
    }

    /// The winning triple, if any (for the highlight set)
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            Verdict::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The winner, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Classify a board as in progress, drawn, or won.
///
/// Scans the triples in [`WINNING_LINES`] order and returns `Won` for the
/// first completed one; a board seeded with two distinct completed lines
/// therefore resolves to the earlier triple in that order. While scanning,
/// every occupied index the triples touch is folded into a seen-set; since
/// the 8 triples collectively cover all 9 cells, a win-free scan that saw 9
/// occupied cells is a draw.
pub fn evaluate(board: &Board) -> Verdict {
    let mut seen = [false; CELL_COUNT];
    let mut occupied = 0usize;

    for line in WINNING_LINES {
        let [a, b, c] = line;
        for idx in line {
            if !seen[idx] && board.is_occupied(idx) {
                seen[idx] = true;
                occupied += 1;
            }
        }

        if let Some(Some(player)) = board.get(a) {
            if board.get(b) == Some(Some(player)) && board.get(c) == Some(Some(player)) {
                return Verdict::Won { player, line };
            }
        }
    }

    if occupied == CELL_COUNT {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
