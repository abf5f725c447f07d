use std::sync::Arc;

use tracing::info;

use crate::domain::repositories::{RepositoryError, ScoreRepository};
use crate::domain::value_objects::{Mark, MarkTally};

/// Zero both scores and drop them from the store
pub struct ResetScores<R: ScoreRepository> {
    score_repo: Arc<R>,
}

impl<R: ScoreRepository> ResetScores<R> {
    pub fn new(score_repo: Arc<R>) -> Self {
        Self { score_repo }
    }

    pub fn execute(&self, scores: &mut MarkTally) -> Result<(), ResetScoresError> {
        *scores = MarkTally::default();
        for mark in [Mark::O, Mark::X] {
            self.score_repo.remove(mark.score_key())?;
        }
        info!("Tic-Tac-Toe scores reset");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResetScoresError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
