//! Rules of play.
//!
//! - `lines`: the eight winning lines and winner detection
//! - `status`: in progress / won / draw classification of a board
//! - `engine`: the `RulesEngine` trait and the transitions that move a
//!   `GameState`
//!
//! Everything here is a function of its inputs. State lives in
//! `crate::core::GameState`; the `Session` owns it.

pub mod lines;
pub mod status;
pub mod engine;

pub use lines::{compute_winner, winning_line, winning_lines, Line, WINNING_LINES};
pub use status::Status;
pub use engine::{ClassicRules, RulesEngine};
