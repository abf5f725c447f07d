//! Rock-Paper-Scissors session
//!
//! Owns everything one game needs: the human's history, streaks, scores,
//! the round counter, the opponent strategy and its random source. Sessions
//! are plain values; any number can exist side by side.

use tracing::{debug, info};

use super::{Move, Outcome, RoundResult};
use crate::domain::services::{settle_round, RandomSource};
use crate::domain::value_objects::{HistoryLog, Scoreboard, SessionStreaks, Side};
use crate::infrastructure::bot::strategies::{Decision, DecisionContext, NexusBot, OpponentStrategy};
use crate::infrastructure::random::RngSource;

/// Human streak that lights up the combo indicator
pub const ON_FIRE_STREAK: u32 = 3;

pub struct RpsSession {
    history: HistoryLog,
    streaks: SessionStreaks,
    scoreboard: Scoreboard,
    round_index: u32,
    last_outcome: Option<Outcome>,
    strategy: Box<dyn OpponentStrategy>,
    rng: Box<dyn RandomSource + Send>,
}

impl RpsSession {
    pub fn new(strategy: Box<dyn OpponentStrategy>, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            history: HistoryLog::new(),
            streaks: SessionStreaks::default(),
            scoreboard: Scoreboard::default(),
            round_index: 0,
            last_outcome: None,
            strategy,
            rng,
        }
    }

    /// Nexus opponent with default policy, seeded when `seed` is given
    pub fn nexus(seed: Option<u64>) -> Self {
        Self::new(
            Box::new(NexusBot::default()),
            Box::new(RngSource::from_seed_option(seed)),
        )
    }

    /// Choose the opponent's answer to `human`
    ///
    /// Records `human` in the history and advances the round counter. The
    /// round still has to be settled (see [`RpsSession::settle`]) for streaks
    /// and scores to move.
    pub fn decide(&mut self, human: Move) -> Move {
        self.decide_with_branch(human).choice
    }

    /// Same as [`RpsSession::decide`], also reporting which rule fired
    pub fn decide_with_branch(&mut self, human: Move) -> Decision {
        let prior_len = self.history.len();
        self.history.record(human);

        let full_history = self.history.as_slice();
        let ctx = DecisionContext {
            current: human,
            round_index: self.round_index,
            prior_history: &full_history[..prior_len],
            full_history,
            human_streak: self.streaks.human,
        };
        let decision = self.strategy.choose(&ctx, self.rng.as_mut());
        self.round_index += 1;

        debug!(
            round = self.round_index,
            human = %human,
            opponent = %decision.choice,
            branch = decision.branch.as_str(),
            strategy = self.strategy.name(),
            "Opponent decided"
        );

        decision
    }

    /// Apply the round's outcome to streaks and scores
    pub fn settle(&mut self, human: Move, opponent: Move) -> Outcome {
        let outcome = settle_round(human, opponent, &mut self.streaks, &mut self.scoreboard);
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Decide and settle in one step
    pub fn play_round(&mut self, human: Move) -> RoundResult {
        let decision = self.decide_with_branch(human);
        let outcome = self.settle(human, decision.choice);

        RoundResult {
            round_number: self.round_index,
            human,
            opponent: decision.choice,
            outcome,
            branch: decision.branch,
            streaks: self.streaks,
            scoreboard: self.scoreboard,
        }
    }

    /// Back to round zero: history, streaks, scores and counter all cleared
    pub fn reset(&mut self) {
        info!(rounds = self.round_index, "Session reset");
        self.history.clear();
        self.streaks.reset();
        self.scoreboard = Scoreboard::default();
        self.round_index = 0;
        self.last_outcome = None;
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn streaks(&self) -> SessionStreaks {
        self.streaks
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn current_streak(&self) -> Option<(Side, u32)> {
        self.streaks.current()
    }

    pub fn is_on_fire(&self) -> bool {
        self.streaks.human >= ON_FIRE_STREAK
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl std::fmt::Debug for RpsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpsSession")
            .field("strategy", &self.strategy.name())
            .field("round_index", &self.round_index)
            .field("history", &self.history)
            .field("streaks", &self.streaks)
            .field("scoreboard", &self.scoreboard)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::bot::strategies::DecisionBranch;
    use crate::infrastructure::random::ScriptedSource;

    fn scripted(draws: &[f64]) -> RpsSession {
        RpsSession::new(
            Box::new(NexusBot::default()),
            Box::new(ScriptedSource::new(draws.iter().copied())),
        )
    }

    #[test]
    fn test_decide_records_and_counts() {
        let mut session = scripted(&[0.0, 0.5, 0.9]);

        assert_eq!(session.decide(Move::Paper), Move::Rock);
        assert_eq!(session.decide(Move::Paper), Move::Paper);
        assert_eq!(session.decide(Move::Rock), Move::Scissors);

        assert_eq!(session.round_index(), 3);
        assert_eq!(
            session.history().as_slice(),
            &[Move::Paper, Move::Paper, Move::Rock]
        );
        // Decide alone never touches streaks
        assert_eq!(session.streaks(), SessionStreaks::default());
    }

    #[test]
    fn test_play_round_settles() {
        // Bootstrap draw 0.9 -> Scissors; Rock beats it
        let mut session = scripted(&[0.9]);
        let result = session.play_round(Move::Rock);

        assert_eq!(result.round_number, 1);
        assert_eq!(result.opponent, Move::Scissors);
        assert_eq!(result.outcome, Outcome::Win);
        assert_eq!(result.branch, DecisionBranch::Bootstrap);
        assert_eq!(result.streaks, SessionStreaks { human: 1, opponent: 0 });
        assert_eq!(result.scoreboard, Scoreboard { human: 1, opponent: 0 });
        assert_eq!(session.last_outcome(), Some(Outcome::Win));
        assert_eq!(session.current_streak(), Some((Side::Human, 1)));
    }

    #[test]
    fn test_on_fire_after_three_wins() {
        // Three bootstrap rounds, all Scissors against Rock
        let mut session = scripted(&[0.9, 0.9, 0.9]);
        for _ in 0..3 {
            session.play_round(Move::Rock);
        }
        assert!(session.is_on_fire());
    }

    #[test]
    fn test_reset_returns_to_bootstrap() {
        let mut session = scripted(&[0.9, 0.9, 0.9, 0.9, 0.9]);
        for _ in 0..4 {
            session.play_round(Move::Rock);
        }
        session.reset();

        assert_eq!(session.round_index(), 0);
        assert!(session.history().is_empty());
        assert_eq!(session.streaks(), SessionStreaks::default());
        assert_eq!(session.scoreboard(), Scoreboard::default());
        assert_eq!(session.last_outcome(), None);

        let decision = session.decide_with_branch(Move::Rock);
        assert_eq!(decision.branch, DecisionBranch::Bootstrap);
    }
}
