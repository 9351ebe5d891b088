//! Winning lines and winner detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::{Board, CellIndex};
use crate::core::mark::Mark;

/// Three cell indices that win when uniformly marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([usize; 3]);

impl Line {
    /// Raw cell indices.
    #[must_use]
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// The cells of this line.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        self.0.into_iter().filter_map(CellIndex::new)
    }

    /// The mark filling this line, if all three cells hold the same one.
    #[must_use]
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    }

    /// Check if a cell lies on this line.
    #[must_use]
    pub fn contains(&self, index: CellIndex) -> bool {
        self.0.contains(&index.get())
    }
}

/// The eight winning lines in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const WINNING_LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// The first completed line in evaluation order.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (*line, mark)))
}

/// The mark of the first completed line, or `None`.
///
/// ```
/// use tictactoe_engine::core::{Board, Mark};
/// use tictactoe_engine::rules::compute_winner;
///
/// let board: Board = "XXX OO. ...".parse().unwrap();
/// assert_eq!(compute_winner(&board), Some(Mark::X));
/// assert_eq!(compute_winner(&Board::empty()), None);
/// ```
#[must_use]
pub fn compute_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

/// Every completed line, in evaluation order.
///
/// Normal play completes at most two lines at once (a fork closed by the
/// last mark), so this stays inline.
#[must_use]
pub fn winning_lines(board: &Board) -> SmallVec<[(Line, Mark); 2]> {
    WINNING_LINES
        .iter()
        .filter_map(|line| line.owner(board).map(|mark| (*line, mark)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(compute_winner(&Board::empty()), None);
        assert!(winning_lines(&Board::empty()).is_empty());
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            for mark in Mark::ALL {
                let mut b = Board::empty();
                for idx in line.cells() {
                    b = b.with_mark(idx, mark);
                }
                assert_eq!(compute_winner(&b), Some(mark), "line {:?}", line);
                assert_eq!(winning_line(&b), Some((line, mark)));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        assert_eq!(compute_winner(&board("XXO ... ...")), None);
        assert_eq!(compute_winner(&board("X.. O.. X..")), None);
    }

    #[test]
    fn test_full_board_without_winner() {
        let b = board("XOX XOO OXO");
        assert!(b.is_full());
        assert_eq!(compute_winner(&b), None);
    }

    #[test]
    fn test_evaluation_order_rows_first() {
        // Top row and left column both complete: the row is reported.
        let b = board("XXX X.. X..");
        assert_eq!(winning_line(&b), Some((Line([0, 1, 2]), Mark::X)));
        assert_eq!(winning_lines(&b).len(), 2);
    }

    #[test]
    fn test_evaluation_order_columns_before_diagonals() {
        let b = board("O.O .OO ..O");
        assert_eq!(winning_line(&b), Some((Line([2, 5, 8]), Mark::O)));
        assert_eq!(
            winning_lines(&b).into_iter().map(|(l, _)| l).collect::<Vec<_>>(),
            vec![Line([2, 5, 8]), Line([0, 4, 8])]
        );
    }

    #[test]
    fn test_first_line_decides_between_marks() {
        // Not reachable in play, but the answer is still fixed.
        let b = board("OOO XXX ...");
        assert_eq!(compute_winner(&b), Some(Mark::O));
    }

    #[test]
    fn test_line_contains() {
        let diag = Line([2, 4, 6]);
        assert!(diag.contains(CellIndex::new(4).unwrap()));
        assert!(!diag.contains(CellIndex::new(0).unwrap()));
    }
}
