//! Engine configuration.
//!
//! A session is configured once at creation:
//! - `Features`: which optional affordances exist (scoreboard + undo, the
//!   jump-to-any-move list)
//! - `UndoTurnPolicy`: how `undo_move` recomputes whose turn it is
//! - `EngineConfig`: combines both
//!
//! The two presets correspond to the two shapes the game has shipped in:
//! `EngineConfig::scoreboard()` and `EngineConfig::move_list()`.

use serde::{Deserialize, Serialize};

/// An optional engine feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// Running X/O score, "New Game" scoring and single-step undo.
    ScoreboardAndUndo,
    /// Jump to any recorded move.
    FullMoveList,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::ScoreboardAndUndo => write!(f, "scoreboard and undo"),
            Feature::FullMoveList => write!(f, "full move list"),
        }
    }
}

/// Feature switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Track scores, credit the winner on `new_game`, allow `undo_move`.
    pub scoreboard_and_undo: bool,

    /// Allow `jump_to` and list every move in the view.
    pub full_move_list: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            scoreboard_and_undo: true,
            full_move_list: false,
        }
    }
}

impl Features {
    /// Check whether a feature is on.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::ScoreboardAndUndo => self.scoreboard_and_undo,
            Feature::FullMoveList => self.full_move_list,
        }
    }
}

/// How `undo_move` updates the turn flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoTurnPolicy {
    /// Flip `x_is_next` unconditionally.
    ///
    /// Correct only for a single step back, which is the only undo the view
    /// offers.
    #[default]
    Toggle,
    /// Derive the turn from the target step: X moves on even steps.
    Parity,
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Enabled features.
    pub features: Features,

    /// Turn handling for `undo_move`.
    pub undo_turn: UndoTurnPolicy,
}

impl EngineConfig {
    /// Scoreboard, undo and new-game flow. This is the default.
    #[must_use]
    pub fn scoreboard() -> Self {
        Self::default()
    }

    /// Jump-to-any-move history list, no scoring or undo.
    #[must_use]
    pub fn move_list() -> Self {
        Self {
            features: Features {
                scoreboard_and_undo: false,
                full_move_list: true,
            },
            undo_turn: UndoTurnPolicy::default(),
        }
    }

    /// Enable or disable scoreboard and undo.
    #[must_use]
    pub fn with_scoreboard_and_undo(mut self, enabled: bool) -> Self {
        self.features.scoreboard_and_undo = enabled;
        self
    }

    /// Enable or disable the full move list.
    #[must_use]
    pub fn with_full_move_list(mut self, enabled: bool) -> Self {
        self.features.full_move_list = enabled;
        self
    }

    /// Set the undo turn policy.
    #[must_use]
    pub fn with_undo_turn(mut self, policy: UndoTurnPolicy) -> Self {
        self.undo_turn = policy;
        self
    }

    /// Check whether a feature is on.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.is_enabled(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.is_enabled(Feature::ScoreboardAndUndo));
        assert!(!config.is_enabled(Feature::FullMoveList));
        assert_eq!(config.undo_turn, UndoTurnPolicy::Toggle);
        assert_eq!(config, EngineConfig::scoreboard());
    }

    #[test]
    fn test_move_list_preset() {
        let config = EngineConfig::move_list();
        assert!(!config.is_enabled(Feature::ScoreboardAndUndo));
        assert!(config.is_enabled(Feature::FullMoveList));
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_full_move_list(true)
            .with_scoreboard_and_undo(false)
            .with_undo_turn(UndoTurnPolicy::Parity);

        assert!(config.features.full_move_list);
        assert!(!config.features.scoreboard_and_undo);
        assert_eq!(config.undo_turn, UndoTurnPolicy::Parity);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::move_list().with_undo_turn(UndoTurnPolicy::Parity);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
