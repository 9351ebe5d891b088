//! Game state: move history, current step, turn and scores.
//!
//! ## History
//!
//! `history[0]` is always the empty board and `history[n]` is the board
//! after the n-th move. Undo and jump-to only move `step_number`; the next
//! move made from an earlier step discards the recorded future.
//!
//! ## Derived values
//!
//! The current board is `history[step_number]` and is never cached. The
//! winner is recomputed from it on every query (see `rules`).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::Error;
use super::mark::{Mark, MarkMap};

/// Authoritative state for one session.
///
/// Uses an `im` persistent vector for the history, so cloning a state (for
/// snapshots or a "copy" in a binding) is O(1).
///
/// Deserialization goes through `is_consistent`, so a loaded state always
/// has a blank first board and a `step_number` inside the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board snapshots, one per move plus the initial empty board.
    history: Vector<Board>,

    /// Index of the displayed board in `history`.
    step_number: usize,

    /// Whose turn it is.
    x_is_next: bool,

    /// Games won by each mark this session.
    scores: MarkMap<u32>,
}

/// Wire form of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    history: Vector<Board>,
    step_number: usize,
    x_is_next: bool,
    scores: MarkMap<u32>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = Error;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
            x_is_next: raw.x_is_next,
            scores: raw.scores,
        };
        if state.is_consistent() {
            Ok(state)
        } else {
            Err(Error::InconsistentState {
                step: state.step_number,
                len: state.history.len(),
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the session start state.
    ///
    /// ## Defaults
    ///
    /// - `history`: `[empty board]`
    /// - `step_number`: 0
    /// - `x_is_next`: true
    /// - scores: 0 / 0
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(Board::empty()),
            step_number: 0,
            x_is_next: true,
            scores: MarkMap::default(),
        }
    }

    // === Queries ===

    /// The board at `step_number`.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.history[self.step_number]
    }

    /// All recorded boards.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    /// Number of recorded boards (moves + 1).
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current position in the history.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X places the next mark.
    #[must_use]
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The mark the next move will place.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &MarkMap<u32> {
        &self.scores
    }

    /// One mark's score.
    #[must_use]
    pub fn score(&self, mark: Mark) -> u32 {
        self.scores[mark]
    }

    /// Check the structural invariants.
    ///
    /// - the first board is empty
    /// - consecutive boards differ by exactly one newly placed mark
    /// - `step_number` points into the history
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let starts_empty = self.history.front().is_some_and(Board::is_blank);
        let single_mark_steps = self
            .history
            .iter()
            .zip(self.history.iter().skip(1))
            .all(|(before, after)| {
                let changed: Vec<_> = after.diff(before).collect();
                changed.len() == 1 && before.cell(changed[0]).is_none()
            });

        starts_empty && single_mark_steps && self.step_number < self.history.len()
    }

    // === Mutation (used by the rules) ===

    /// Drop every board after `step_number`.
    pub(crate) fn truncate_future(&mut self) {
        self.history.truncate(self.step_number + 1);
    }

    /// Append a board and make it current.
    pub(crate) fn push_board(&mut self, board: Board) {
        self.history.push_back(board);
        self.step_number = self.history.len() - 1;
    }

    /// Move to a recorded step. Caller checks the range.
    pub(crate) fn set_step(&mut self, step: usize) {
        debug_assert!(step < self.history.len());
        self.step_number = step;
    }

    /// Set the turn flag.
    pub(crate) fn set_x_is_next(&mut self, x_is_next: bool) {
        self.x_is_next = x_is_next;
    }

    /// Flip the turn flag.
    pub(crate) fn toggle_turn(&mut self) {
        self.x_is_next = !self.x_is_next;
    }

    /// Reinitialize the board, keeping scores.
    pub(crate) fn reset_board(&mut self) {
        self.history = Vector::unit(Board::empty());
        self.step_number = 0;
        self.x_is_next = true;
    }

    /// Add one win to a mark's score.
    pub(crate) fn credit(&mut self, mark: Mark) {
        self.scores[mark] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::CellIndex;

    fn cell(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_game_state_new() {
        let state = GameState::new();

        assert_eq!(state.history_len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.score(Mark::X), 0);
        assert_eq!(state.score(Mark::O), 0);
        assert!(state.current_board().is_blank());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_push_board_moves_step() {
        let mut state = GameState::new();
        let board = state.current_board().with_mark(cell(0), Mark::X);

        state.push_board(board);

        assert_eq!(state.history_len(), 2);
        assert_eq!(state.step_number(), 1);
        assert_eq!(state.current_board(), board);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_truncate_future() {
        let mut state = GameState::new();
        let b1 = Board::empty().with_mark(cell(0), Mark::X);
        let b2 = b1.with_mark(cell(4), Mark::O);
        state.push_board(b1);
        state.push_board(b2);

        state.set_step(1);
        state.truncate_future();

        assert_eq!(state.history_len(), 2);
        assert_eq!(state.current_board(), b1);
    }

    #[test]
    fn test_reset_board_keeps_scores() {
        let mut state = GameState::new();
        state.push_board(Board::empty().with_mark(cell(4), Mark::X));
        state.toggle_turn();
        state.credit(Mark::O);

        state.reset_board();

        assert_eq!(state.history_len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.score(Mark::O), 1);
    }

    #[test]
    fn test_inconsistent_history_detected() {
        let mut state = GameState::new();
        let two_marks: Board = "XO.......".parse().unwrap();
        state.push_board(two_marks);

        assert!(!state.is_consistent());
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new();
        state.push_board(Board::empty().with_mark(cell(2), Mark::X));

        let snapshot = state.clone();
        state.reset_board();

        assert_eq!(snapshot.history_len(), 2);
        assert_eq!(state.history_len(), 1);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new();
        state.push_board(Board::empty().with_mark(cell(8), Mark::X));
        state.toggle_turn();
        state.credit(Mark::X);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    fn state_json() -> serde_json::Value {
        let mut state = GameState::new();
        state.push_board(Board::empty().with_mark(cell(4), Mark::X));
        state.toggle_turn();
        serde_json::to_value(&state).unwrap()
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let mut json = state_json();
        json["history"] = serde_json::json!([]);
        json["step_number"] = serde_json::json!(0);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();

        assert!(err.to_string().contains("inconsistent"));
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut json = state_json();
        json["step_number"] = serde_json::json!(5);

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_blank_start() {
        let mut json = state_json();
        let first = json["history"][1].clone();
        json["history"] = serde_json::json!([first]);
        json["step_number"] = serde_json::json!(0);

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_try_from_reports_bounds() {
        let raw = RawGameState {
            history: Vector::unit(Board::empty()),
            step_number: 3,
            x_is_next: true,
            scores: MarkMap::default(),
        };

        assert_eq!(
            GameState::try_from(raw),
            Err(Error::InconsistentState { step: 3, len: 1 })
        );
    }
}
