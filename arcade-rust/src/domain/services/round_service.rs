//! Round service - settles a Rock-Paper-Scissors round

use tracing::debug;

use crate::domain::entities::{outcome, Move, Outcome};
use crate::domain::value_objects::{Scoreboard, SessionStreaks};

/// Compute the outcome and apply it to streaks and scores
pub fn settle_round(
    human: Move,
    opponent: Move,
    streaks: &mut SessionStreaks,
    scoreboard: &mut Scoreboard,
) -> Outcome {
    let result = outcome(human, opponent);
    streaks.apply(result);
    scoreboard.apply(result);

    debug!(
        human = %human,
        opponent = %opponent,
        outcome = %result,
        human_streak = streaks.human,
        opponent_streak = streaks.opponent,
        "Round settled"
    );

    result
}
