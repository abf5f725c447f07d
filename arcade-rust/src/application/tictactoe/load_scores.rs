use std::sync::Arc;

use tracing::warn;

use crate::domain::repositories::{RepositoryError, ScoreRepository};
use crate::domain::value_objects::{Mark, MarkTally};

/// Load persisted Tic-Tac-Toe scores
///
/// Missing keys count as zero. A value that is not a number is logged and
/// also counts as zero.
pub struct LoadScores<R: ScoreRepository> {
    score_repo: Arc<R>,
}

impl<R: ScoreRepository> LoadScores<R> {
    pub fn new(score_repo: Arc<R>) -> Self {
        Self { score_repo }
    }

    pub fn execute(&self) -> Result<MarkTally, LoadScoresError> {
        let mut tally = MarkTally::default();

        for mark in [Mark::O, Mark::X] {
            let key = mark.score_key();
            if let Some(raw) = self.score_repo.get(key)? {
                match raw.trim().parse::<u32>() {
                    Ok(score) => tally.set(mark, score),
                    Err(_) => warn!("Ignoring malformed stored score {}='{}'", key, raw),
                }
            }
        }

        Ok(tally)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadScoresError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
