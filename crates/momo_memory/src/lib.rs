//! Storage collaborator and pet state persistence.
//!
//! The simulation core only ever talks to the [`Storage`] trait: a
//! plain get/set/remove contract over string keys and serialized
//! values. [`PersistenceAdapter`] sits on top and handles the one rule
//! that matters: a missing or corrupt saved state is never an error, it
//! just means the session starts with a fresh pet.

use anyhow::{Context, Result};
use async_trait::async_trait;
use momo_core::PetState;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key under a data
/// directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub async fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read stored key '{key}'")),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .with_context(|| format!("Failed to write stored key '{key}'"))
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove stored key '{key}'")),
        }
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// Serializes the pet state to the storage collaborator. Only the pet
/// state itself is persisted, never transient session flags.
#[derive(Clone)]
pub struct PersistenceAdapter {
    storage: Arc<dyn Storage>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the saved pet, if any. A storage error or a payload that no
    /// longer deserializes is treated exactly like an absent save: the
    /// caller starts fresh.
    pub async fn load(&self) -> Option<PetState> {
        let raw = match self.storage.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read saved state: {e:#}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Saved state is corrupt ({e}), starting fresh");
                None
            }
        }
    }

    pub async fn save(&self, state: &PetState) -> Result<()> {
        let raw = serde_json::to_string(state).context("Failed to serialize pet state")?;
        self.storage.set(&self.key, &raw).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key).await
    }
}
