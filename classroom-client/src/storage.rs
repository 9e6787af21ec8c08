/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Persistence of the user's display name.
//!
//! The UI backs [`KeyValueStore`] with browser localStorage; tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// Storage key for the display name.
pub const USERNAME_KEY: &str = "overcast-username";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

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

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The stored display name under [`USERNAME_KEY`].
#[derive(Debug, Default)]
pub struct NameStore<S> {
    store: S,
}

impl<S: KeyValueStore> NameStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved name, or `None` if nothing usable is stored or the store
    /// cannot be read.
    pub fn load(&self) -> Option<String> {
        match self.store.get(USERNAME_KEY) {
            Ok(Some(name)) => {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Failed to read saved display name: {e}");
                None
            }
        }
    }

    /// Trim and save `name`, returning what was stored.
    pub fn save(&self, name: &str) -> Result<String, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::EmptyName);
        }
        self.store.set(USERNAME_KEY, name)?;
        Ok(name.to_string())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(USERNAME_KEY)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
