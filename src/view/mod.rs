//! View model for renderers.
//!
//! Rendering itself is left to the host UI. `GameView` is a pure function of
//! a `Session` carrying the cells, the status line, the scoreboard and the
//! buttons (with the `Action` each one dispatches), so a renderer never has
//! to re-derive game logic.

mod game_view;

pub use game_view::{Control, GameView, MoveEntry};
