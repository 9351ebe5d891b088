//! # tictactoe-engine
//!
//! The state engine behind a 3×3 tic-tac-toe UI: move application, move
//! history with undo and jump-to-move, win detection and a running score
//! across games.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All game state lives in one `GameState` value that
//!    the rules mutate through `&mut`. No hidden UI-framework state.
//!
//! 2. **Derived, Not Cached**: The displayed board is `history[step_number]`
//!    and the winner is recomputed from it on every query.
//!
//! 3. **Invalid Clicks Are Traffic**: Clicking a filled cell or playing on
//!    after a win is a silent no-op. The `try_*` path reports the reason for
//!    hosts that want it.
//!
//! ## Architecture
//!
//! - **Persistent History**: Board snapshots live in an `im::Vector`, so a
//!   session clones in O(1).
//!
//! - **Configurable Variants**: The scoreboard/undo flow and the
//!   jump-to-any-move list are features of one engine (`EngineConfig`).
//!
//! ## Modules
//!
//! - `core`: Marks, boards, state, actions, configuration, errors
//! - `rules`: Winning lines, status, and the `RulesEngine` transitions
//! - `session`: The `Session` a UI holds, with action log and replay
//! - `view`: `GameView`, the presentation model for renderers

pub mod core;
pub mod rules;
pub mod session;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Mark, MarkMap,
    Board, CellIndex,
    EngineConfig, Feature, Features, UndoTurnPolicy,
    Action, ActionRecord,
    GameState,
    Error, Result,
};

pub use crate::rules::{
    compute_winner, winning_line, winning_lines, Line, WINNING_LINES,
    Status, RulesEngine, ClassicRules,
};

pub use crate::session::Session;

pub use crate::view::{Control, GameView, MoveEntry};
