//! Game sessions.
//!
//! A `Session` is what a UI holds on to: it owns the `GameState`, applies
//! user actions through the rules, and logs what was applied so the session
//! can be replayed.

mod game;

pub use game::Session;
