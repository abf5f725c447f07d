//! Board - 3x3 Tic-Tac-Toe grid, cells indexed 0-8 row by row

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Winning lines, checked in this order
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 5, 8],
    [2, 4, 6],
    [3, 4, 5],
    [6, 7, 8],
];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    O,
    X,
}

impl Mark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::O => "O",
            Mark::X => "X",
        }
    }

    pub fn opponent(self) -> Mark {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Key under which this mark's score is persisted
    pub fn score_key(self) -> &'static str {
        match self {
            Mark::O => "scoreO",
            Mark::X => "scoreX",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at a cell; `None` when empty or out of range
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell].is_none()
    }

    pub(crate) fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = Some(mark);
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// First completed line in `WIN_PATTERNS` order
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        WIN_PATTERNS.iter().find_map(|&line| {
            let [a, b, c] = line;
            match (self.cells[a], self.cells[b], self.cells[c]) {
                (Some(m1), Some(m2), Some(m3)) if m1 == m2 && m2 == m3 => Some((m1, line)),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> SmallVec<[usize; CELL_COUNT]> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(cell, mark) in marks {
            board.set(cell, mark);
        }
        board
    }

    #[test]
    fn test_every_pattern_wins() {
        for line in WIN_PATTERNS {
            let board = board_from(&[(line[0], Mark::X), (line[1], Mark::X), (line[2], Mark::X)]);
            assert_eq!(board.winning_line(), Some((Mark::X, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Mark::O), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_empty_cells_and_full() {
        let mut board = board_from(&[(4, Mark::O), (0, Mark::X)]);
        assert_eq!(board.empty_cells().as_slice(), &[1, 2, 3, 5, 6, 7, 8]);
        assert!(!board.is_full());

        for cell in 0..CELL_COUNT {
            if board.is_empty_cell(cell) {
                board.set(cell, Mark::O);
            }
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_cell(9));
    }

    #[test]
    fn test_score_keys() {
        assert_eq!(Mark::O.score_key(), "scoreO");
        assert_eq!(Mark::X.score_key(), "scoreX");
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
