use serde::Serialize;

use super::{Move, Outcome};
use crate::domain::value_objects::{Scoreboard, SessionStreaks};
use crate::infrastructure::bot::strategies::DecisionBranch;

/// A settled Rock-Paper-Scissors round
///
/// Returned to the presentation layer; the session does not keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// 1-based round number within the session
    pub round_number: u32,
    pub human: Move,
    pub opponent: Move,
    pub outcome: Outcome,
    pub branch: DecisionBranch,
    pub streaks: SessionStreaks,
    pub scoreboard: Scoreboard,
}
