//! Score tallies for both games

use serde::{Deserialize, Serialize};

use super::Mark;
use crate::domain::entities::Outcome;

/// Rock-Paper-Scissors wins per side; draws score nobody
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub human: u32,
    pub opponent: u32,
}

impl Scoreboard {
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.human += 1,
            Outcome::Lose => self.opponent += 1,
            Outcome::Draw => {}
        }
    }
}

/// Tic-Tac-Toe wins per mark
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkTally {
    pub o: u32,
    pub x: u32,
}

impl MarkTally {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::O => self.o,
            Mark::X => self.x,
        }
    }

    pub fn set(&mut self, mark: Mark, value: u32) {
        match mark {
            Mark::O => self.o = value,
            Mark::X => self.x = value,
        }
    }

    pub fn increment(&mut self, mark: Mark) {
        self.set(mark, self.get(mark) + 1);
    }
}
