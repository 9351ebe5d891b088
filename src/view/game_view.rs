//! Presentation model derived from a session.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, CellIndex, Feature, Mark, MarkMap};
use crate::rules::{Line, Status};
use crate::session::Session;

/// A button a renderer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Step back one move.
    Undo { step: usize },
    /// Credit the winner and start over.
    NewGame { winner: Mark },
    /// Start over without scoring.
    Reset,
    /// Jump to a recorded step.
    JumpTo { step: usize },
}

impl Control {
    /// Button text.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Control::Undo { .. } => "Undo".to_string(),
            Control::NewGame { .. } => "New Game".to_string(),
            Control::Reset => "Reset Game".to_string(),
            Control::JumpTo { step: 0 } => "Go to game start".to_string(),
            Control::JumpTo { step } => format!("Go to move #{step}"),
        }
    }

    /// The action this button dispatches.
    #[must_use]
    pub fn action(&self) -> Action {
        match *self {
            Control::Undo { step } => Action::Undo { step },
            Control::NewGame { winner } => Action::NewGame { winner },
            Control::Reset => Action::Reset,
            Control::JumpTo { step } => Action::JumpTo { step },
        }
    }
}

/// One entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index.
    pub step: usize,
    /// Whether this is the displayed step.
    pub current: bool,
    /// Button for this entry.
    pub control: Control,
}

/// Everything a renderer needs to draw the game.
///
/// Built by `Session::view`. A renderer shows:
/// - the nine `cells`; a click on a playable cell dispatches `cell_action(i)`
/// - `status_text()`
/// - the scoreboard when `scores` is present
/// - the `undo` button when present, and the `primary` button
/// - the `moves` list (empty unless the session has a full move list)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The displayed board.
    pub cells: Board,
    /// Cells a click would mark. Empty once the board is won or full.
    pub playable: Vec<CellIndex>,
    /// Status of the displayed board.
    pub status: Status,
    /// Completed line to highlight.
    pub winning_line: Option<Line>,
    /// X/O scores, when the scoreboard is enabled.
    pub scores: Option<MarkMap<u32>>,
    /// Undo button, shown once a move has been made.
    pub undo: Option<Control>,
    /// "New Game" after a win, "Reset Game" otherwise.
    pub primary: Control,
    /// Move list entries, step 0 first.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Build the view for a session.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        let config = session.config();
        let step = session.step_number();
        let status = session.status();

        let scores = config
            .is_enabled(Feature::ScoreboardAndUndo)
            .then(|| *session.scores());

        let undo = (config.is_enabled(Feature::ScoreboardAndUndo) && step > 0)
            .then(|| Control::Undo { step: step - 1 });

        let primary = match status.winner() {
            Some(winner) => Control::NewGame { winner },
            None => Control::Reset,
        };

        let moves = if config.is_enabled(Feature::FullMoveList) {
            (0..session.history_len())
                .map(|s| MoveEntry {
                    step: s,
                    current: s == step,
                    control: Control::JumpTo { step: s },
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            cells: session.current_board(),
            playable: session.legal_cells(),
            status,
            winning_line: session.winning_line(),
            scores,
            undo,
            primary,
            moves,
        }
    }

    /// Status line text.
    #[must_use]
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Text shown in a cell: `"X"`, `"O"` or empty.
    #[must_use]
    pub fn cell_text(&self, index: usize) -> String {
        self.cells.get(index).map(|m| m.to_string()).unwrap_or_default()
    }

    /// The action a click on cell `index` dispatches, or `None` if the
    /// cell is not playable.
    #[must_use]
    pub fn cell_action(&self, index: usize) -> Option<Action> {
        CellIndex::new(index)
            .filter(|cell| self.playable.contains(cell))
            .map(|cell| Action::Place(cell.get()))
    }

    /// Whether a cell lies on the highlighted line.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        match (self.winning_line, CellIndex::new(index)) {
            (Some(line), Some(cell)) => line.contains(cell),
            _ => false,
        }
    }

    /// All buttons in display order: primary, undo, then the move list.
    #[must_use]
    pub fn controls(&self) -> Vec<Control> {
        std::iter::once(self.primary)
            .chain(self.undo)
            .chain(self.moves.iter().map(|entry| entry.control))
            .collect()
    }
}
