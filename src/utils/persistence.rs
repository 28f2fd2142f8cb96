//! Key-value persistence for character, inventory and task documents.
//!
//! Each document is stored as a JSON string under a fixed key. Stores only
//! move strings around; the typed helpers own (de)serialisation. A document
//! that fails to parse is logged and treated as missing.

use crate::character::inventory::InventorySnapshot;
use crate::character::user::UserSnapshot;
use crate::core::task::TaskType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

pub const USER_STATE_KEY: &str = "habit:user";
pub const INVENTORY_STATE_KEY: &str = "habit:inventory";
pub const TASKS_KEY: &str = "habit:tasks";

pub const ALL_KEYS: [&str; 3] = [USER_STATE_KEY, INVENTORY_STATE_KEY, TASKS_KEY];

/// Directory under the home directory used by [`FileStore::open_default`].
const STORE_DIR_NAME: &str = ".habit-balance";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    HomeDirUnavailable,

    #[error("store lock was poisoned")]
    LockPoisoned,
}

impl<T> From<PoisonError<T>> for PersistenceError {
    fn from(_: PoisonError<T>) -> Self {
        PersistenceError::LockPoisoned
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Minimal string key-value store.
pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store, mainly for tests and the simulator.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock()?.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Keys map to file names with `:` replaced, e.g. `habit:user` → `habit_user.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Store in `~/.habit-balance/`, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(PersistenceError::HomeDirUnavailable)?;
        Self::new(home_dir.join(STORE_DIR_NAME))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{file_name}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Loaded {} from {}", key, path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Persisted task summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSnapshot {
    pub id: String,
    pub title: String,
    /// Any [`TaskType`], including `reward` tasks.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Load and parse a document. Missing or unparseable documents yield `None`.
pub fn load_document<T: DeserializeOwned>(store: &impl StateStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Failed to parse persisted state {}: {}", key, e);
            Ok(None)
        }
    }
}

pub fn save_document<T: Serialize>(store: &impl StateStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Loaded user snapshots are hydrated before being returned.
pub fn load_user_state(store: &impl StateStore) -> Result<Option<UserSnapshot>> {
    let snapshot: Option<UserSnapshot> = load_document(store, USER_STATE_KEY)?;
    Ok(snapshot.map(UserSnapshot::hydrate))
}

pub fn save_user_state(store: &impl StateStore, snapshot: &UserSnapshot) -> Result<()> {
    save_document(store, USER_STATE_KEY, snapshot)
}

pub fn load_inventory_state(store: &impl StateStore) -> Result<Option<InventorySnapshot>> {
    load_document(store, INVENTORY_STATE_KEY)
}

pub fn save_inventory_state(store: &impl StateStore, snapshot: &InventorySnapshot) -> Result<()> {
    save_document(store, INVENTORY_STATE_KEY, snapshot)
}

pub fn load_tasks(store: &impl StateStore) -> Result<Option<Vec<TaskSnapshot>>> {
    load_document(store, TASKS_KEY)
}

pub fn save_tasks(store: &impl StateStore, tasks: &[TaskSnapshot]) -> Result<()> {
    save_document(store, TASKS_KEY, &tasks)
}

/// Remove every persisted document.
pub fn clear_persistence(store: &impl StateStore) -> Result<()> {
    for key in ALL_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
