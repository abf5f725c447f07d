//! Tic-Tac-Toe game rules
//!
//! O opens the first game. Each `play_again` hands the opening move to the
//! other mark; `reset_game` keeps the current opener.

use serde::Serialize;

use crate::domain::value_objects::{Board, Mark, CELL_COUNT};

/// State of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicTacToeError {
    #[error("Cell {cell} is out of range (expected 0-8)")]
    CellOutOfRange { cell: usize },
    #[error("Cell {cell} is already taken")]
    CellOccupied { cell: usize },
    #[error("Game is already over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGame {
    board: Board,
    to_move: Mark,
    first_turn: Mark,
    status: GameStatus,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self::with_first_turn(Mark::O)
    }

    pub fn with_first_turn(first_turn: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first_turn,
            first_turn,
            status: GameStatus::InProgress,
        }
    }

    /// Place the mark of the player to move
    pub fn place(&mut self, cell: usize) -> Result<GameStatus, TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(TicTacToeError::CellOutOfRange { cell });
        }
        if !self.board.is_empty_cell(cell) {
            return Err(TicTacToeError::CellOccupied { cell });
        }

        self.board.set(cell, self.to_move);
        self.to_move = self.to_move.opponent();

        self.status = match self.board.winning_line() {
            Some((mark, line)) => GameStatus::Won { mark, line },
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        Ok(self.status)
    }

    /// Clear the board; the current opener moves first again
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.to_move = self.first_turn;
        self.status = GameStatus::InProgress;
    }

    /// Hand the opening move to the other mark and start over
    pub fn play_again(&mut self) {
        self.first_turn = self.first_turn.opponent();
        self.reset_game();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn first_turn(&self) -> Mark {
        self.first_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}
