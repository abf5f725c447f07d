//! Opponent strategies module
//!
//! Contains the opponents a Rock-Paper-Scissors session can play against.

mod nexus_bot;
mod random_bot;

pub use nexus_bot::*;
pub use random_bot::*;

use serde::Serialize;

use crate::domain::entities::Move;
use crate::domain::services::RandomSource;
use crate::domain::value_objects::PolicyConfig;
use crate::infrastructure::bot::move_analyzer::DetectedPattern;

/// Everything a strategy may look at for one decision
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    /// The move the human just played
    pub current: Move,
    /// Decisions already made this session
    pub round_index: u32,
    /// History before `current` was recorded
    pub prior_history: &'a [Move],
    /// History including `current`
    pub full_history: &'a [Move],
    pub human_streak: u32,
}

/// Which rule produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "branch", rename_all = "camelCase")]
pub enum DecisionBranch {
    /// Too early to analyze; uniform pick
    Bootstrap,
    /// Countered a detected pattern
    Pattern { pattern: DetectedPattern },
    /// Countered the current move to break a human streak
    StreakBreaker,
    /// Deliberate uniform pick
    RandomPlay,
    /// Countered the human's most frequent move
    Frequency {
        #[serde(rename = "mostFrequent")]
        most_frequent: Move,
    },
}

impl DecisionBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionBranch::Bootstrap => "bootstrap",
            DecisionBranch::Pattern { .. } => "pattern",
            DecisionBranch::StreakBreaker => "streakBreaker",
            DecisionBranch::RandomPlay => "randomPlay",
            DecisionBranch::Frequency { .. } => "frequency",
        }
    }
}

/// Opponent move plus the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub choice: Move,
    #[serde(flatten)]
    pub branch: DecisionBranch,
}

impl Decision {
    pub fn new(choice: Move, branch: DecisionBranch) -> Self {
        Self { choice, branch }
    }
}

/// Opponent strategy trait
pub trait OpponentStrategy: Send + Sync {
    /// Short identifier for logs and the CLI
    fn name(&self) -> &'static str;

    /// Pick the opponent's move for this round
    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RandomSource) -> Decision;
}

/// Selectable opponents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Nexus,
    Random,
}

impl OpponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpponentKind::Nexus => "nexus",
            OpponentKind::Random => "random",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nexus" => Some(OpponentKind::Nexus),
            "random" => Some(OpponentKind::Random),
            _ => None,
        }
    }

    pub fn build(self, policy: PolicyConfig) -> Box<dyn OpponentStrategy> {
        match self {
            OpponentKind::Nexus => Box::new(NexusBot::new(policy)),
            OpponentKind::Random => Box::new(RandomBot::new()),
        }
    }
}

impl Default for OpponentKind {
    fn default() -> Self {
        OpponentKind::Nexus
    }
}
