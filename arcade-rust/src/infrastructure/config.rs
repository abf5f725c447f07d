//! Application configuration
//!
//! Read from the environment (after `.env` is loaded by the binary). Bad
//! values are logged and replaced by defaults.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::domain::entities::RpsSession;
use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::PolicyConfig;
use crate::infrastructure::bot::strategies::OpponentKind;
use crate::infrastructure::random::RngSource;
use crate::infrastructure::storage::JsonFileScoreRepository;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed RNG seed; fresh entropy when unset
    pub seed: Option<u64>,
    pub opponent: OpponentKind,
    /// Tic-Tac-Toe score file
    pub scores_path: PathBuf,
    /// Pause before the opponent's move is shown
    pub thinking_delay: Duration,
    pub policy: PolicyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opponent: OpponentKind::Nexus,
            scores_path: PathBuf::from("data/arcade-scores.json"),
            thinking_delay: Duration::from_millis(1000),
            policy: PolicyConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("ARCADE_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring invalid ARCADE_SEED '{}'", raw);
                None
            }
        });

        let opponent = lookup("ARCADE_OPPONENT")
            .map(|raw| {
                OpponentKind::from_str(&raw).unwrap_or_else(|| {
                    warn!("Unknown ARCADE_OPPONENT '{}', using {}", raw, defaults.opponent.as_str());
                    defaults.opponent
                })
            })
            .unwrap_or(defaults.opponent);

        let scores_path = lookup("ARCADE_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_path);

        let thinking_delay = lookup("ARCADE_THINKING_MS")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.thinking_delay);

        Self {
            seed,
            opponent,
            scores_path,
            thinking_delay,
            policy: defaults.policy,
        }
    }

    /// Fresh Rock-Paper-Scissors session for this configuration
    pub fn rps_session(&self) -> RpsSession {
        RpsSession::new(
            self.opponent.build(self.policy.clone()),
            Box::new(RngSource::from_seed_option(self.seed)),
        )
    }

    pub fn score_repository(&self) -> Result<JsonFileScoreRepository, RepositoryError> {
        JsonFileScoreRepository::open(&self.scores_path)
    }
}
