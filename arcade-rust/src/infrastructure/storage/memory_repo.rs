use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::repositories::{RepositoryError, ScoreRepository};

/// In-process score store; contents vanish with the value
pub struct InMemoryScoreRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryScoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entries = self.entries.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().map_err(|_| RepositoryError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}
