//! Error types for the engine.
//!
//! The user-facing operations on `Session` never fail: an invalid click is
//! ordinary traffic and is absorbed as a no-op. These errors are what the
//! `try_*` paths report, and what board parsing returns.

use thiserror::Error;

use super::config::Feature;
use super::mark::Mark;

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {index} is out of bounds (must be 0-8)")]
    CellOutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game already won by {winner}")]
    GameOver { winner: Mark },

    #[error("step {step} is out of range (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },

    #[error("{feature} is disabled for this session")]
    FeatureDisabled { feature: Feature },

    #[error("board string has wrong length: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("inconsistent game state (step {step}, history has {len} entries)")]
    InconsistentState { step: usize, len: usize },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::CellOccupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(
            Error::GameOver { winner: Mark::O }.to_string(),
            "game already won by O"
        );
        assert_eq!(
            Error::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "step 7 is out of range (history has 3 entries)"
        );
        assert_eq!(
            Error::FeatureDisabled { feature: Feature::FullMoveList }.to_string(),
            "full move list is disabled for this session"
        );
        assert_eq!(
            Error::InconsistentState { step: 5, len: 1 }.to_string(),
            "inconsistent game state (step 5, history has 1 entries)"
        );
    }
}
