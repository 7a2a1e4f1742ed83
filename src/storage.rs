//! Task Persistence
//!
//! Key/value storage for the task collection. The browser backend writes
//! to `window.localStorage`; tests use an in-memory fake.

use std::collections::HashSet;

use log::warn;
use wasm_bindgen::JsValue;

use crate::error::{StorageError, StorageResult};
use crate::models::Task;

/// Backend holding the serialized task collection under a single key
pub trait TaskStorage {
    /// Raw stored value, `None` when nothing has been stored yet
    fn read_raw(&self) -> StorageResult<Option<String>>;

    /// Overwrite the stored value
    fn write_raw(&mut self, raw: &str) -> StorageResult<()>;

    /// Load the collection.
    ///
    /// Absent, unreadable or malformed values load as an empty collection.
    fn load(&self) -> Vec<Task> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("could not read stored tasks, starting empty: {}", err);
                return Vec::new();
            }
        };
        match decode_tasks(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("discarding stored tasks: {}", err);
                Vec::new()
            }
        }
    }

    /// Serialize the whole collection and overwrite the stored value
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let raw = encode_tasks(tasks)?;
        self.write_raw(&raw)
    }
}

/// Parse a stored collection, rejecting it if any id repeats or leaves no
/// room for the next id
pub fn decode_tasks(raw: &str) -> StorageResult<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if task.id == u32::MAX {
            return Err(StorageError::IdOutOfRange(task.id));
        }
        if !seen.insert(task.id) {
            return Err(StorageError::DuplicateId(task.id));
        }
    }
    Ok(tasks)
}

pub fn encode_tasks(tasks: &[Task]) -> StorageResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage` entry
///
/// The `Storage` handle is looked up on each access so the backend stays
/// `Send + Sync` and can live in a reactive `StoredValue`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

impl TaskStorage for BrowserStorage {
    fn read_raw(&self) -> StorageResult<Option<String>> {
        Self::storage()?.get_item(&self.key).map_err(js_error)
    }

    fn write_raw(&mut self, raw: &str) -> StorageResult<()> {
        Self::storage()?.set_item(&self.key, raw).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

// ========================
// In-memory fake
// ========================

/// In-memory backend for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    value: Option<String>,
    fail_writes: bool,
    writes: usize,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_value(raw: &str) -> Self {
        Self {
            value: Some(raw.to_string()),
            ..Default::default()
        }
    }

    /// Backend whose writes always fail (e.g. quota exceeded)
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Decode whatever is currently stored
    pub fn stored_tasks(&self) -> Vec<Task> {
        self.value
            .as_deref()
            .map(|raw| decode_tasks(raw).expect("stored value should decode"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl TaskStorage for MemoryStorage {
    fn read_raw(&self) -> StorageResult<Option<String>> {
        Ok(self.value.clone())
    }

    fn write_raw(&mut self, raw: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Access("QuotaExceededError".to_string()));
        }
        self.value = Some(raw.to_string());
        self.writes += 1;
        Ok(())
    }
}
