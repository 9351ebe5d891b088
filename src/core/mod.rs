//! Core engine types: marks, boards, state, actions, configuration, errors.
//!
//! This module holds the data model only. The rules that move a `GameState`
//! from one position to the next live in `crate::rules`.

pub mod mark;
pub mod board;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use mark::{Mark, MarkMap};
pub use board::{Board, CellIndex, CELL_COUNT, SIDE};
pub use config::{EngineConfig, Feature, Features, UndoTurnPolicy};
pub use action::{Action, ActionRecord};
pub use state::GameState;
pub use error::{Error, Result};
