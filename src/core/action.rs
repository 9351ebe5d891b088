//! Actions: every user interaction the engine understands.
//!
//! A renderer turns clicks into `Action`s and hands them to the session.
//! Applied actions are logged as `ActionRecord`s so a session can be replayed.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// A user interaction.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::core::{Action, Mark};
///
/// let click = Action::Place(4);
/// let undo = Action::Undo { step: 0 };
/// let again = Action::NewGame { winner: Mark::X };
///
/// assert_eq!(click.name(), "place");
/// assert!(!undo.resets());
/// assert!(again.resets());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Mark a cell (raw index 0-8) for the player whose turn it is.
    Place(usize),
    /// Step back to `step` (the "Undo" button).
    Undo { step: usize },
    /// Jump to any recorded step (the move list).
    JumpTo { step: usize },
    /// Clear the board, keep scores.
    Reset,
    /// Credit `winner` and clear the board.
    NewGame { winner: Mark },
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Place(_) => "place",
            Action::Undo { .. } => "undo",
            Action::JumpTo { .. } => "jump_to",
            Action::Reset => "reset",
            Action::NewGame { .. } => "new_game",
        }
    }

    /// Check if this action reinitializes the board.
    #[must_use]
    pub const fn resets(&self) -> bool {
        matches!(self, Action::Reset | Action::NewGame { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(index) => write!(f, "place({index})"),
            Action::Undo { step } => write!(f, "undo({step})"),
            Action::JumpTo { step } => write!(f, "jump_to({step})"),
            Action::Reset => write!(f, "reset"),
            Action::NewGame { winner } => write!(f, "new_game({winner})"),
        }
    }
}

/// An applied action with metadata for the session log.
///
/// Used for:
/// - Replay
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the session log (starts at 0).
    pub sequence: usize,

    /// `step_number` after the action was applied.
    pub step_after: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, sequence: usize, step_after: usize) -> Self {
        Self {
            action,
            sequence,
            step_after,
        }
    }
}
