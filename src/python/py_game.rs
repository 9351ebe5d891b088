//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, EngineConfig, Mark, UndoTurnPolicy};
use crate::session::Session;

use super::py_core::PyMark;

/// Python wrapper for Session.
///
/// One tic-tac-toe session: board, history, turn and scores.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: Session,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - scoreboard: Track scores and allow undo
    /// - full_move_list: Allow jumping to any recorded move
    /// - undo_parity: Derive the turn from the undo target step instead of
    ///   flipping it
    #[new]
    #[pyo3(signature = (scoreboard = true, full_move_list = false, undo_parity = false))]
    fn new(scoreboard: bool, full_move_list: bool, undo_parity: bool) -> Self {
        let undo_turn = if undo_parity {
            UndoTurnPolicy::Parity
        } else {
            UndoTurnPolicy::Toggle
        };
        let config = EngineConfig::default()
            .with_scoreboard_and_undo(scoreboard)
            .with_full_move_list(full_move_list)
            .with_undo_turn(undo_turn);
        Self {
            session: Session::new(config),
        }
    }

    /// Mark a cell (0-8). Ignored when the move is not allowed.
    fn apply_move(&mut self, index: usize) {
        self.session.apply_move(index);
    }

    /// Mark a cell (0-8), raising ValueError when the move is not allowed.
    fn try_move(&mut self, index: usize) -> PyResult<()> {
        self.session.try_apply(Action::Place(index))?;
        Ok(())
    }

    /// Step back to a recorded step.
    fn undo_move(&mut self, step: usize) {
        self.session.undo_move(step);
    }

    /// Jump to any recorded step.
    fn jump_to(&mut self, step: usize) {
        self.session.jump_to(step);
    }

    /// Clear the board, keeping scores.
    fn reset_board(&mut self) {
        self.session.reset_board();
    }

    /// Credit the winner and clear the board.
    ///
    /// "X" credits X; any other tag credits O.
    fn new_game(&mut self, winner: &str) {
        self.session.new_game(Mark::from_score_tag(winner));
    }

    /// Cells that accept a move right now.
    fn legal_moves(&self) -> Vec<usize> {
        self.session
            .legal_cells()
            .into_iter()
            .map(|cell| cell.get())
            .collect()
    }

    /// The displayed board as nine entries of "X", "O" or None.
    #[getter]
    fn squares(&self) -> Vec<Option<String>> {
        self.session
            .current_board()
            .cells()
            .iter()
            .map(|cell| cell.map(|m| m.to_string()))
            .collect()
    }

    /// Current step in the history.
    #[getter]
    fn step_number(&self) -> usize {
        self.session.step_number()
    }

    /// Number of recorded boards.
    #[getter]
    fn history_len(&self) -> usize {
        self.session.history_len()
    }

    #[getter]
    fn x_is_next(&self) -> bool {
        self.session.x_is_next()
    }

    #[getter]
    fn x_score(&self) -> u32 {
        self.session.score(Mark::X)
    }

    #[getter]
    fn o_score(&self) -> u32 {
        self.session.score(Mark::O)
    }

    /// Winner of the displayed board, if any.
    #[getter]
    fn winner(&self) -> Option<PyMark> {
        self.session.winner().map(PyMark)
    }

    /// Status line: "Winner: X", "Next player: O" or "Draw".
    #[getter]
    fn status(&self) -> String {
        self.session.status().to_string()
    }

    /// Copy the game.
    fn copy(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }

    fn __str__(&self) -> String {
        self.session.current_board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(step={}, status={:?}, score={}-{})",
            self.session.step_number(),
            self.session.status().to_string(),
            self.session.score(Mark::X),
            self.session.score(Mark::O)
        )
    }
}
