//! Todo Persistence
//!
//! Saves the to-do list as one JSON array under a single key of a
//! synchronous key-value store (browser local storage in the page).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{js_message, StorageError};
use crate::models::TodoItem;

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

/// Store that lives only as long as the page; used when local storage is
/// blocked, and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The to-do list's slot in a key-value store
#[derive(Clone)]
pub struct TodoStorage {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl TodoStorage {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved list.
    ///
    /// A missing key, an unreadable store, or invalid JSON all yield an
    /// empty list.
    pub fn load(&self) -> Vec<TodoItem> {
        let data = match self.backend.get(&self.key) {
            Ok(Some(data)) => data,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::debug!("[STORAGE] Read of '{}' failed: {}", self.key, err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(todos) => todos,
            Err(err) => {
                log::debug!("[STORAGE] Ignoring malformed '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    pub fn save(&self, todos: &[TodoItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(todos)?;
        self.backend.set(&self.key, &json)
    }
}
