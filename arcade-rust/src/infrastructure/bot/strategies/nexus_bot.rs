//! Nexus opponent strategy
//!
//! Reads the human's history and blends pattern countering, streak breaking
//! and randomness. Rules are tried in order, each gated by one draw:
//!
//! 1. Bootstrap rounds: uniform pick.
//! 2. Pattern in the history before this round: counter the prediction.
//! 3. Human streak: counter the move just played.
//! 4. Occasional uniform pick.
//! 5. Counter the most frequent move, current move included.

use tracing::trace;

use super::{Decision, DecisionBranch, DecisionContext, OpponentStrategy};
use crate::domain::services::{random_move, RandomSource};
use crate::domain::value_objects::PolicyConfig;
use crate::infrastructure::bot::move_analyzer::{detect_pattern, most_frequent};

pub struct NexusBot {
    config: PolicyConfig,
}

impl NexusBot {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl Default for NexusBot {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl OpponentStrategy for NexusBot {
    fn name(&self) -> &'static str {
        "nexus"
    }

    fn choose(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RandomSource) -> Decision {
        let config = &self.config;

        if ctx.round_index < config.bootstrap_rounds {
            return Decision::new(random_move(rng), DecisionBranch::Bootstrap);
        }

        // Pattern analysis must not see the move being answered
        if let Some(pattern) = detect_pattern(ctx.prior_history, config) {
            trace!(?pattern, "Pattern detected");
            if rng.next_f64() > config.pattern_threshold {
                return Decision::new(
                    pattern.predicted().counters(),
                    DecisionBranch::Pattern { pattern },
                );
            }
        }

        if ctx.human_streak >= config.streak_threshold
            && rng.next_f64() > config.streak_break_threshold
        {
            return Decision::new(ctx.current.counters(), DecisionBranch::StreakBreaker);
        }

        if rng.next_f64() < config.random_play_threshold {
            return Decision::new(random_move(rng), DecisionBranch::RandomPlay);
        }

        // Frequency counts the current move
        match most_frequent(ctx.full_history) {
            Some(mv) => Decision::new(
                mv.counters(),
                DecisionBranch::Frequency { most_frequent: mv },
            ),
            None => Decision::new(random_move(rng), DecisionBranch::RandomPlay),
        }
    }
}
