//! The game session: rules, state and the action log in one place.

use im::Vector;
use tracing::instrument;

use crate::core::{
    Action, ActionRecord, Board, CellIndex, EngineConfig, GameState, Mark, MarkMap, Result,
};
use crate::rules::{winning_line, ClassicRules, Line, RulesEngine, Status};
use crate::view::GameView;

/// A running tic-tac-toe session.
///
/// Owns the authoritative `GameState` for the lifetime of the UI. Every user
/// interaction maps to one method here. The plain methods (`apply_move`,
/// `undo_move`, ...) never fail: an action the rules refuse is ignored and
/// the state is left exactly as it was. The `try_apply` path reports the
/// reason instead.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::{Mark, Session, Status};
///
/// let mut session = Session::default();
/// for cell in [0, 4, 1, 5, 2] {
///     session.apply_move(cell);
/// }
/// assert_eq!(session.winner(), Some(Mark::X));
///
/// // Clicks after a win are ignored.
/// session.apply_move(8);
/// assert_eq!(session.step_number(), 5);
///
/// session.new_game(Mark::X);
/// assert_eq!(session.score(Mark::X), 1);
/// assert_eq!(session.status(), Status::InProgress { next: Mark::X });
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    rules: ClassicRules,
    state: GameState,
    log: Vector<ActionRecord>,
}

impl Session {
    /// Start a session.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rules: ClassicRules::new(config),
            state: GameState::new(),
            log: Vector::new(),
        }
    }

    /// Rebuild a session by applying `actions` in order.
    ///
    /// Refused actions are skipped exactly as they would be live, so
    /// replaying `session.actions()` with the same config reproduces
    /// `session.state()`.
    #[must_use]
    pub fn replay<'a>(config: EngineConfig, actions: impl IntoIterator<Item = &'a Action>) -> Self {
        let mut session = Self::new(config);
        for action in actions {
            session.dispatch(*action);
        }
        session
    }

    // === Operations ===

    /// Mark cell `index` for the player to move.
    ///
    /// Ignored if the index is not 0-8, the cell is taken, or the displayed
    /// board already has a winner.
    pub fn apply_move(&mut self, index: usize) {
        self.dispatch(Action::Place(index));
    }

    /// Move back to `step`. The view offers `step_number - 1`.
    pub fn undo_move(&mut self, step: usize) {
        self.dispatch(Action::Undo { step });
    }

    /// Jump to any recorded step (move-list configurations only).
    pub fn jump_to(&mut self, step: usize) {
        self.dispatch(Action::JumpTo { step });
    }

    /// Clear the board. Scores are kept.
    pub fn reset_board(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Credit `winner` and clear the board.
    pub fn new_game(&mut self, winner: Mark) {
        self.dispatch(Action::NewGame { winner });
    }

    /// Apply any action, ignoring refusals. Returns whether it was applied.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.try_apply(action).is_ok()
    }

    /// Apply an action, reporting why it was refused.
    ///
    /// On `Err` the state and the log are unchanged. On `Ok` the action is
    /// appended to the log. The log spans the whole session and is not
    /// cleared by `Reset` or `NewGame`, since replaying it must rebuild the
    /// scores as well as the board.
    #[instrument(
        level = "debug",
        skip(self, action),
        fields(action = action.name(), step = self.state.step_number())
    )]
    pub fn try_apply(&mut self, action: Action) -> Result<()> {
        self.rules.apply_action(&mut self.state, &action)?;

        let sequence = self.log.len();
        self.log
            .push_back(ActionRecord::new(action, sequence, self.state.step_number()));
        Ok(())
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.rules.config()
    }

    /// The full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applied actions for the whole session, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// The actions of the log, for `replay`.
    pub fn actions(&self) -> impl Iterator<Item = &Action> + '_ {
        self.log.iter().map(|record| &record.action)
    }

    /// The displayed board, `history[step_number]`.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.state.current_board()
    }

    /// All recorded boards.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        self.state.history()
    }

    /// Number of recorded boards.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.history_len()
    }

    /// Current step.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.state.step_number()
    }

    /// Whether X moves next.
    #[must_use]
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next()
    }

    /// The mark the next move places.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        self.state.next_mark()
    }

    /// Winner of the displayed board.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.rules.winner(&self.state)
    }

    /// The completed line on the displayed board, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.state.current_board()).map(|(line, _)| line)
    }

    /// Status of the displayed board.
    #[must_use]
    pub fn status(&self) -> Status {
        self.rules.status(&self.state)
    }

    /// Cells that accept a move right now.
    #[must_use]
    pub fn legal_cells(&self) -> Vec<CellIndex> {
        self.rules.legal_cells(&self.state)
    }

    /// One mark's score.
    #[must_use]
    pub fn score(&self, mark: Mark) -> u32 {
        self.state.score(mark)
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &MarkMap<u32> {
        self.state.scores()
    }

    /// Presentation model for a renderer.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_session_new() {
        let session = Session::default();

        assert_eq!(session.history_len(), 1);
        assert_eq!(session.step_number(), 0);
        assert!(session.x_is_next());
        assert!(session.log().is_empty());
        assert_eq!(session.status(), Status::InProgress { next: Mark::X });
    }

    #[test]
    fn test_only_applied_actions_are_logged() {
        let mut session = Session::default();

        session.apply_move(4);
        session.apply_move(4);
        session.undo_move(7);
        session.apply_move(0);

        let actions: Vec<_> = session.actions().copied().collect();
        assert_eq!(actions, vec![Action::Place(4), Action::Place(0)]);
        assert_eq!(session.log()[1].sequence, 1);
        assert_eq!(session.log()[1].step_after, 2);
    }

    #[test]
    fn test_try_apply_reports_reason() {
        let mut session = Session::default();
        session.apply_move(0);

        assert_eq!(
            session.try_apply(Action::Place(0)),
            Err(Error::CellOccupied { index: 0 })
        );
        assert!(!session.dispatch(Action::Place(0)));
        assert!(session.dispatch(Action::Place(1)));
    }

    #[test]
    fn test_winning_line_for_highlight() {
        let mut session = Session::default();
        for cell in [2, 0, 4, 1, 6] {
            session.apply_move(cell);
        }

        let line = session.winning_line().unwrap();
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_replay_reproduces_state() {
        let mut session = Session::default();
        for cell in [0, 4, 8] {
            session.apply_move(cell);
        }
        session.undo_move(2);
        session.apply_move(2);
        session.reset_board();
        session.apply_move(5);

        let replayed = Session::replay(session.config().clone(), session.actions());

        assert_eq!(replayed.state(), session.state());
        assert_eq!(replayed.log(), session.log());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut session = Session::default();
        session.apply_move(0);

        let snapshot = session.clone();
        session.apply_move(1);

        assert_eq!(snapshot.step_number(), 1);
        assert_eq!(session.step_number(), 2);
    }

    #[test]
    fn test_log_spans_games() {
        let mut session = Session::default();
        for _ in 0..100 {
            for cell in [0, 4, 1, 5, 2] {
                session.apply_move(cell);
            }
            session.new_game(Mark::X);
        }

        assert_eq!(session.history_len(), 1);
        assert_eq!(session.log().len(), 600);
        assert!(session
            .log()
            .iter()
            .enumerate()
            .all(|(i, record)| record.sequence == i));

        let replayed = Session::replay(session.config().clone(), session.actions());
        assert_eq!(replayed.score(Mark::X), 100);
    }
}
