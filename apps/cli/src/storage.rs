//! Durable per-key progress storage — the client-local analogue of the web
//! client's localStorage.
//!
//! Snapshots are JSON arrays of completed step numbers, one file per key.
//! Keys combine career name and user id (`roadmap_{career}_{user}`) so
//! progress never leaks across users sharing a machine or across careers.
//! Read failures of any kind degrade to "no progress"; they are logged,
//! never surfaced.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::warn;

/// Storage key for one (career, user) progress record.
pub fn progress_key(career_name: &str, user_id: &str) -> String {
    format!("roadmap_{career_name}_{user_id}")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store for progress snapshots. The Roadmap Progress Tracker is
/// the sole writer; `get` must absorb corruption by returning `None`.
pub trait ProgressStore: Send + Sync {
    fn get(&self, key: &str) -> Option<BTreeSet<u32>>;
    fn set(&self, key: &str, snapshot: &BTreeSet<u32>) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// File-backed store: one `<encoded-key>.json` per record under the client
/// data directory. Keys are percent-encoded so arbitrary career names
/// ("CI/CD Engineer") stay filesystem-safe.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", urlencoding::encode(key)))
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Option<BTreeSet<u32>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Unreadable progress snapshot {}: {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(steps) => Some(steps.into_iter().collect()),
            Err(e) => {
                warn!("Corrupt progress snapshot {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&self, key: &str, snapshot: &BTreeSet<u32>) -> Result<(), StoreError> {
        let steps: Vec<u32> = snapshot.iter().copied().collect();
        let raw = serde_json::to_string(&steps)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            // Clearing progress that was never saved is a no-op.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store used by unit tests; same snapshot wire form as `FileStore`
/// so serialization behavior is exercised too.
#[cfg(test)]
pub struct MemoryStore {
    records: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }
}

#[cfg(test)]
impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<BTreeSet<u32>> {
        let records = self.records.lock().unwrap();
        let raw = records.get(key)?;
        serde_json::from_str::<Vec<u32>>(raw)
            .ok()
            .map(|steps| steps.into_iter().collect())
    }

    fn set(&self, key: &str, snapshot: &BTreeSet<u32>) -> Result<(), StoreError> {
        let steps: Vec<u32> = snapshot.iter().copied().collect();
        let raw = serde_json::to_string(&steps)?;
        self.records.lock().unwrap().insert(key.to_string(), raw);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}
