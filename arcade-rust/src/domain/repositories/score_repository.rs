/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Key-value store for persisted scores
///
/// String keys and string values, the way browser local storage works.
pub trait ScoreRepository: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
