//! Marks and per-mark data storage.
//!
//! ## Mark
//!
//! The symbol a player places in a cell. X always moves first.
//!
//! ## MarkMap
//!
//! Fixed two-entry storage indexed by `Mark`, used for the scoreboard.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Mark {
    /// Both marks, X first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark to place given the turn flag.
    #[must_use]
    pub const fn for_turn(x_is_next: bool) -> Self {
        if x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Resolve a score tag coming from a string-typed caller.
    ///
    /// Only the exact tag `"X"` credits X. Anything else credits O, the same
    /// binary attribution a "New Game" button has always used.
    ///
    /// ```
    /// use tictactoe_engine::core::Mark;
    ///
    /// assert_eq!(Mark::from_score_tag("X"), Mark::X);
    /// assert_eq!(Mark::from_score_tag("O"), Mark::O);
    /// assert_eq!(Mark::from_score_tag("x"), Mark::O);
    /// ```
    #[must_use]
    pub fn from_score_tag(tag: &str) -> Self {
        if tag == "X" {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Slot index used by `MarkMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-mark data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tictactoe_engine::core::{Mark, MarkMap};
///
/// let mut scores: MarkMap<u32> = MarkMap::default();
/// scores[Mark::O] += 1;
///
/// assert_eq!(scores[Mark::X], 0);
/// assert_eq!(scores[Mark::O], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    data: [T; 2],
}

impl<T> MarkMap<T> {
    /// Create a MarkMap with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            data: [factory(Mark::X), factory(Mark::O)],
        }
    }

    /// Create a MarkMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a mark's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        &self.data[mark.index()]
    }

    /// Get a mutable reference to a mark's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        &mut self.data[mark.index()]
    }

    /// Iterate over (Mark, &T) pairs, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        Mark::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_mark_for_turn() {
        assert_eq!(Mark::for_turn(true), Mark::X);
        assert_eq!(Mark::for_turn(false), Mark::O);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(format!("{}", Mark::X), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_score_tag_is_binary() {
        assert_eq!(Mark::from_score_tag("X"), Mark::X);
        assert_eq!(Mark::from_score_tag("O"), Mark::O);
        assert_eq!(Mark::from_score_tag(""), Mark::O);
        assert_eq!(Mark::from_score_tag("X "), Mark::O);
        assert_eq!(Mark::from_score_tag("draw"), Mark::O);
    }

    #[test]
    fn test_mark_map_new() {
        let map = MarkMap::new(|m| m.index() * 10);

        assert_eq!(map[Mark::X], 0);
        assert_eq!(map[Mark::O], 10);
    }

    #[test]
    fn test_mark_map_mutation() {
        let mut map: MarkMap<u32> = MarkMap::with_value(0);

        map[Mark::X] += 2;
        *map.get_mut(Mark::O) = 5;

        assert_eq!(map[Mark::X], 2);
        assert_eq!(map[Mark::O], 5);
    }

    #[test]
    fn test_mark_map_iter() {
        let map = MarkMap::new(|m| m.symbol());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Mark::X, &'X'), (Mark::O, &'O')]);
    }

    #[test]
    fn test_mark_map_serialization() {
        let map = MarkMap::new(|m| m.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: MarkMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
