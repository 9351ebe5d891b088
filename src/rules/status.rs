//! Game status derived from a board.

use serde::{Deserialize, Serialize};

use super::lines::compute_winner;
use crate::core::board::Board;
use crate::core::mark::Mark;

/// Classification of the displayed board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No winner yet and at least one empty cell.
    InProgress { next: Mark },
    /// A line is complete.
    Won { winner: Mark },
    /// Every cell is filled and no line is complete.
    Draw,
}

impl Status {
    /// Classify a board. `next` is the mark that would move next.
    #[must_use]
    pub fn of(board: &Board, next: Mark) -> Self {
        if let Some(winner) = compute_winner(board) {
            Status::Won { winner }
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress { next }
        }
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Check if no more moves can be made.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress { next } => write!(f, "Next player: {next}"),
            Status::Won { winner } => write!(f, "Winner: {winner}"),
            Status::Draw => write!(f, "Draw"),
        }
    }
}
