use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{GameStatus, TicTacToeError, TicTacToeGame};
use crate::domain::repositories::{RepositoryError, ScoreRepository};
use crate::domain::value_objects::{Mark, MarkTally};

/// Place mark input
pub struct PlaceMarkInput {
    /// Cell index, 0-8
    pub cell: usize,
}

/// Place mark output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceMarkOutput {
    pub placed: Mark,
    pub status: GameStatus,
    pub scores: MarkTally,
}

/// Place mark use case
///
/// A winning placement bumps the winner's score and saves both scores. The
/// caller's tally only changes once both saves succeeded.
pub struct PlaceMark<R: ScoreRepository> {
    score_repo: Arc<R>,
}

impl<R: ScoreRepository> PlaceMark<R> {
    pub fn new(score_repo: Arc<R>) -> Self {
        Self { score_repo }
    }

    pub fn execute(
        &self,
        game: &mut TicTacToeGame,
        scores: &mut MarkTally,
        input: PlaceMarkInput,
    ) -> Result<PlaceMarkOutput, PlaceMarkError> {
        let placed = game.to_move();
        let status = game.place(input.cell)?;

        if let GameStatus::Won { mark, .. } = status {
            let mut next = *scores;
            next.increment(mark);

            // Loser's unchanged score first, so a failed save never leaves a
            // half-updated pair behind
            for m in [mark.opponent(), mark] {
                self.score_repo.set(m.score_key(), &next.get(m).to_string())?;
            }
            *scores = next;
            info!(winner = mark.as_str(), o = scores.o, x = scores.x, "Tic-Tac-Toe game won");
        }

        Ok(PlaceMarkOutput {
            placed,
            status,
            scores: *scores,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceMarkError {
    #[error("Invalid move: {0}")]
    Game(#[from] TicTacToeError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryScoreRepository;

    /// Store that refuses writes to one key
    struct RejectingRepository {
        inner: InMemoryScoreRepository,
        rejected_key: &'static str,
    }

    impl ScoreRepository for RejectingRepository {
        fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            if key == self.rejected_key {
                return Err(RepositoryError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), RepositoryError> {
            self.inner.remove(key)
        }
    }

    fn win_for_o<R: ScoreRepository>(
        use_case: &PlaceMark<R>,
        scores: &mut MarkTally,
    ) -> Result<PlaceMarkOutput, PlaceMarkError> {
        let mut game = TicTacToeGame::new();
        for cell in [0, 3, 1, 4] {
            use_case.execute(&mut game, scores, PlaceMarkInput { cell })?;
        }
        use_case.execute(&mut game, scores, PlaceMarkInput { cell: 2 })
    }

    #[test]
    fn test_failed_save_keeps_tally() {
        for rejected_key in ["scoreO", "scoreX"] {
            let inner = InMemoryScoreRepository::new();
            inner.set("scoreO", "3").unwrap();
            inner.set("scoreX", "1").unwrap();
            let repo = Arc::new(RejectingRepository { inner, rejected_key });
            let use_case = PlaceMark::new(repo.clone());
            let mut scores = MarkTally { o: 3, x: 1 };

            let result = win_for_o(&use_case, &mut scores);

            assert!(matches!(result, Err(PlaceMarkError::Repository(_))));
            assert_eq!(scores, MarkTally { o: 3, x: 1 });
            assert_eq!(repo.get("scoreO").unwrap().as_deref(), Some("3"));
            assert_eq!(repo.get("scoreX").unwrap().as_deref(), Some("1"));
        }
    }

    #[test]
    fn test_win_saves_both_scores() {
        let repo = Arc::new(InMemoryScoreRepository::new());
        let use_case = PlaceMark::new(repo.clone());
        let mut scores = MarkTally { o: 0, x: 4 };

        let output = win_for_o(&use_case, &mut scores).unwrap();

        assert_eq!(output.scores, MarkTally { o: 1, x: 4 });
        assert_eq!(scores, output.scores);
        assert_eq!(repo.get("scoreO").unwrap().as_deref(), Some("1"));
        assert_eq!(repo.get("scoreX").unwrap().as_deref(), Some("4"));
    }
}
