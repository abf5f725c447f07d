//! Random opponent
//!
//! Uniform pick every round, no analysis. Baseline for comparing against Nexus.

use super::{Decision, DecisionBranch, DecisionContext, OpponentStrategy};
use crate::domain::services::{random_move, RandomSource};

pub struct RandomBot;

impl RandomBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for RandomBot {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, _ctx: &DecisionContext<'_>, rng: &mut dyn RandomSource) -> Decision {
        Decision::new(random_move(rng), DecisionBranch::RandomPlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Move;
    use crate::infrastructure::random::ScriptedSource;

    #[test]
    fn test_ignores_history() {
        let history = [Move::Rock; 6];
        let ctx = DecisionContext {
            current: Move::Rock,
            round_index: 5,
            prior_history: &history[..5],
            full_history: &history,
            human_streak: 4,
        };
        let mut rng = ScriptedSource::new([0.9]);

        let decision = RandomBot::new().choose(&ctx, &mut rng);

        assert_eq!(decision, Decision::new(Move::Scissors, DecisionBranch::RandomPlay));
        assert_eq!(rng.consumed(), 1);
    }
}
