use serde::{Deserialize, Serialize};

use crate::domain::entities::Outcome;

/// Which side of a Rock-Paper-Scissors round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Opponent => "opponent",
        }
    }
}

/// Consecutive wins per side
///
/// The winner's streak increments and the loser's resets; a draw resets both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStreaks {
    pub human: u32,
    pub opponent: u32,
}

impl SessionStreaks {
    /// Apply a round outcome (from the human's side)
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                self.human += 1;
                self.opponent = 0;
            }
            Outcome::Lose => {
                self.opponent += 1;
                self.human = 0;
            }
            Outcome::Draw => {
                self.human = 0;
                self.opponent = 0;
            }
        }
    }

    /// The running streak, human first
    pub fn current(&self) -> Option<(Side, u32)> {
        if self.human > 0 {
            Some((Side::Human, self.human))
        } else if self.opponent > 0 {
            Some((Side::Opponent, self.opponent))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
