//! Rules engine: the state transitions.
//!
//! `RulesEngine::apply_action` is the single entry point that moves a
//! `GameState`. Every transition validates first and mutates second, so a
//! rejected action leaves the state untouched.
//!
//! ## Transitions
//!
//! - `Place(i)`: truncate future, copy the current board, mark cell `i` for
//!   the player to move, push, flip the turn
//! - `Undo { step }`: reposition, turn per `UndoTurnPolicy`
//! - `JumpTo { step }`: reposition, X to move on even steps
//! - `Reset`: single empty board, X to move, scores kept
//! - `NewGame { winner }`: credit `winner`, then `Reset`

use tracing::{debug, info, trace};

use super::lines::compute_winner;
use super::status::Status;
use crate::core::action::Action;
use crate::core::board::CellIndex;
use crate::core::config::{EngineConfig, Feature, UndoTurnPolicy};
use crate::core::error::{Error, Result};
use crate::core::mark::Mark;
use crate::core::state::GameState;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: Must not mutate; returns the reason an action is refused
/// - `apply_action`: Must leave `state` unchanged when it returns `Err`
/// - `status`: Derived from `history[step_number]` on every call
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Check whether an action would be accepted.
    fn validate(&self, state: &GameState, action: &Action) -> Result<()>;

    /// Apply an action to the game state.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<()>;

    // === Convenience Methods ===

    /// Status of the displayed board.
    fn status(&self, state: &GameState) -> Status {
        Status::of(&state.current_board(), state.next_mark())
    }

    /// Winner of the displayed board.
    fn winner(&self, state: &GameState) -> Option<Mark> {
        compute_winner(&state.current_board())
    }

    /// Cells a `Place` would currently be accepted on.
    ///
    /// Empty once the displayed board has a winner.
    fn legal_cells(&self, state: &GameState) -> Vec<CellIndex> {
        CellIndex::all()
            .filter(|idx| self.validate(state, &Action::Place(idx.get())).is_ok())
            .collect()
    }
}

/// The standard 3×3 rules.
#[derive(Clone, Debug, Default)]
pub struct ClassicRules {
    config: EngineConfig,
}

impl ClassicRules {
    /// Create rules for a configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    fn require(&self, feature: Feature) -> Result<()> {
        if self.config.is_enabled(feature) {
            Ok(())
        } else {
            Err(Error::FeatureDisabled { feature })
        }
    }

    fn check_step(state: &GameState, step: usize) -> Result<()> {
        let len = state.history_len();
        if step < len {
            Ok(())
        } else {
            Err(Error::StepOutOfRange { step, len })
        }
    }

    fn check_place(state: &GameState, index: usize) -> Result<CellIndex> {
        let cell = CellIndex::try_new(index)?;
        let board = state.current_board();
        if let Some(winner) = compute_winner(&board) {
            return Err(Error::GameOver { winner });
        }
        if !board.is_empty_at(cell) {
            return Err(Error::CellOccupied { index });
        }
        Ok(cell)
    }

    fn place(&self, state: &mut GameState, cell: CellIndex) {
        let mark = state.next_mark();
        let board = state.current_board().with_mark(cell, mark);

        if state.step_number() + 1 < state.history_len() {
            trace!(
                discarded = state.history_len() - state.step_number() - 1,
                "dropping recorded future"
            );
        }
        state.truncate_future();
        state.push_board(board);
        state.toggle_turn();

        if let Some(winner) = compute_winner(&board) {
            info!(%winner, step = state.step_number(), "line completed");
        }
    }

    fn undo(&self, state: &mut GameState, step: usize) {
        state.set_step(step);
        match self.config.undo_turn {
            UndoTurnPolicy::Toggle => state.toggle_turn(),
            UndoTurnPolicy::Parity => state.set_x_is_next(step % 2 == 0),
        }
    }

    fn jump_to(&self, state: &mut GameState, step: usize) {
        state.set_step(step);
        state.set_x_is_next(step % 2 == 0);
    }

    fn new_game(&self, state: &mut GameState, winner: Mark) {
        if self.config.is_enabled(Feature::ScoreboardAndUndo) {
            state.credit(winner);
            info!(
                %winner,
                x = state.score(Mark::X),
                o = state.score(Mark::O),
                "game scored"
            );
        }
        state.reset_board();
    }
}

impl RulesEngine for ClassicRules {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, action: &Action) -> Result<()> {
        match *action {
            Action::Place(index) => Self::check_place(state, index).map(|_| ()),
            Action::Undo { step } => {
                self.require(Feature::ScoreboardAndUndo)?;
                Self::check_step(state, step)
            }
            Action::JumpTo { step } => {
                self.require(Feature::FullMoveList)?;
                Self::check_step(state, step)
            }
            Action::Reset | Action::NewGame { .. } => Ok(()),
        }
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<()> {
        if let Err(err) = self.validate(state, action) {
            debug!(%action, %err, "action ignored");
            return Err(err);
        }

        match *action {
            Action::Place(index) => {
                let cell = Self::check_place(state, index)?;
                self.place(state, cell);
            }
            Action::Undo { step } => self.undo(state, step),
            Action::JumpTo { step } => self.jump_to(state, step),
            Action::Reset => state.reset_board(),
            Action::NewGame { winner } => self.new_game(state, winner),
        }

        if action.resets() {
            debug!(
                x = state.score(Mark::X),
                o = state.score(Mark::O),
                "board cleared"
            );
        }

        Ok(())
    }
}
