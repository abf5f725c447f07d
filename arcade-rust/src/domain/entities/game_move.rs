//! Move algebra for the three-way cyclic game
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//! The "counters" relation is the inverse: the move that beats a given move.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three cyclically ordered choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in canonical cycle order (Rock -> Paper -> Scissors -> Rock)
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Position in the canonical cycle
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Move at a cycle position (wraps modulo 3)
    #[inline]
    pub fn from_index(index: usize) -> Move {
        Self::ALL[index % 3]
    }

    /// The move this one defeats
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one
    pub fn counters(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// One step forward in the canonical cycle
    #[inline]
    pub fn next_in_cycle(self) -> Move {
        Self::from_index(self.index() + 1)
    }

    /// Result of playing `self` against `opponent`, from `self`'s side
    pub fn against(self, opponent: Move) -> Outcome {
        outcome(self, opponent)
    }

    /// Keyboard shortcut mapping: r / p / s, case-insensitive
    pub fn from_key(key: char) -> Result<Move, ParseMoveError> {
        match key.to_ascii_lowercase() {
            'r' => Ok(Move::Rock),
            'p' => Ok(Move::Paper),
            's' => Ok(Move::Scissors),
            _ => Err(ParseMoveError::UnknownKey(key)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(ParseMoveError::UnknownName(s.to_string())),
        }
    }
}

/// Rejected move input at the boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("Unknown move '{0}' (expected rock, paper or scissors)")]
    UnknownName(String),
    #[error("Unmapped key '{0}' (expected r, p or s)")]
    UnknownKey(char),
}

/// Round result from the human's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }

    /// Same round seen from the other side
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw iff equal, Win iff `human` beats `opponent`, Lose otherwise
pub fn outcome(human: Move, opponent: Move) -> Outcome {
    if human == opponent {
        Outcome::Draw
    } else if human.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
