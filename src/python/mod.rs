//! Python bindings for the tic-tac-toe engine.
//!
//! Built with the `python` feature.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe_engine as ttt
//!
//! game = ttt.Game(scoreboard=True)
//! for cell in [0, 4, 1, 5, 2]:
//!     game.apply_move(cell)
//!
//! assert game.status == "Winner: X"
//! game.new_game(str(game.winner))
//! assert game.x_score == 1
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// tictactoe_engine: tic-tac-toe state engine with undo and scoring.
#[pymodule]
fn tictactoe_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMark>()?;
    m.add_class::<PyGame>()?;

    Ok(())
}
