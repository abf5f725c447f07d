//! JSON file score store
//!
//! Keeps the whole key/value map in memory and rewrites the file on every
//! change. Writes go to a temp file first and are renamed into place. The
//! in-memory map only changes once the file write succeeded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::repositories::{RepositoryError, ScoreRepository};

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntries {
    pub updated_at: i64,
    pub entries: BTreeMap<String, String>,
}

pub struct JsonFileScoreRepository {
    file_path: PathBuf,
    data: RwLock<StoredEntries>,
}

impl JsonFileScoreRepository {
    /// Open the store at `file_path`
    ///
    /// A missing file starts empty. A file that does not parse is logged and
    /// replaced on the next write.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let file_path = file_path.into();

        let data = match fs::read_to_string(&file_path) {
            Ok(content) => match serde_json::from_str::<StoredEntries>(&content) {
                Ok(data) => {
                    debug!(path = %file_path.display(), keys = data.entries.len(), "Score store loaded");
                    data
                }
                Err(e) => {
                    warn!(path = %file_path.display(), "Failed to parse score store, starting fresh: {}", e);
                    StoredEntries::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %file_path.display(), "Score store not found, starting fresh");
                StoredEntries::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            file_path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write(&self, data: &mut StoredEntries) -> Result<(), RepositoryError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        data.updated_at = chrono::Utc::now().timestamp_millis();
        let content = serde_json::to_string_pretty(data)?;

        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.file_path)?;

        debug!(path = %self.file_path.display(), keys = data.entries.len(), "Score store saved");
        Ok(())
    }
}

impl ScoreRepository for JsonFileScoreRepository {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let data = self.data.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(data.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut data = self.data.write().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut next = data.clone();
        next.entries.insert(key.to_string(), value.to_string());
        self.write(&mut next)?;
        *data = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut data = self.data.write().map_err(|_| RepositoryError::LockPoisoned)?;
        if !data.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = data.clone();
        next.entries.remove(key);
        self.write(&mut next)?;
        *data = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "arcade-store-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir.join("scores.json")
    }

    #[test]
    fn test_persists_across_reopen() {
        let path = temp_store_path("reopen");

        let repo = JsonFileScoreRepository::open(&path).unwrap();
        repo.set("scoreX", "7").unwrap();
        drop(repo);

        let reopened = JsonFileScoreRepository::open(&path).unwrap();
        assert_eq!(reopened.get("scoreX").unwrap().as_deref(), Some("7"));

        reopened.remove("scoreX").unwrap();
        let again = JsonFileScoreRepository::open(&path).unwrap();
        assert_eq!(again.get("scoreX").unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = temp_store_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileScoreRepository::open(&path).unwrap();
        assert_eq!(repo.get("scoreO").unwrap(), None);

        repo.set("scoreO", "1").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let stored: StoredEntries = serde_json::from_str(&content).unwrap();
        assert_eq!(stored.entries.get("scoreO").map(String::as_str), Some("1"));
        assert!(stored.updated_at > 0);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let path = temp_store_path("failed-write");
        let root = path.parent().unwrap().to_path_buf();
        let store_path = root.join("blocker").join("scores.json");

        let repo = JsonFileScoreRepository::open(&store_path).unwrap();
        repo.set("scoreX", "2").unwrap();

        // Parent directory replaced by a regular file
        fs::remove_dir_all(root.join("blocker")).unwrap();
        fs::write(root.join("blocker"), "not a directory").unwrap();

        assert!(repo.set("scoreO", "5").is_err());
        assert_eq!(repo.get("scoreO").unwrap(), None);

        assert!(repo.remove("scoreX").is_err());
        assert_eq!(repo.get("scoreX").unwrap().as_deref(), Some("2"));

        let _ = fs::remove_dir_all(&root);
    }
}
