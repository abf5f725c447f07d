use crate::domain::entities::{Move, ParseMoveError, RoundResult, RpsSession};

/// Play round input
///
/// Raw player input: a single key (`r`, `p`, `s`) or a move name.
pub struct PlayRoundInput<'a> {
    pub raw: &'a str,
}

impl PlayRoundInput<'_> {
    pub fn parse(&self) -> Result<Move, ParseMoveError> {
        let trimmed = self.raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Move::from_key(key),
            _ => trimmed.parse(),
        }
    }
}

/// Play round use case
///
/// Input is validated here; the session only ever sees a real move.
pub struct PlayRound;

impl PlayRound {
    pub fn execute(
        &self,
        session: &mut RpsSession,
        input: PlayRoundInput<'_>,
    ) -> Result<RoundResult, PlayRoundError> {
        let human = input.parse()?;
        Ok(session.play_round(human))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlayRoundError {
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] ParseMoveError),
}
