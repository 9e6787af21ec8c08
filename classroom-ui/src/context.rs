// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Dioxus's context system. Each piece of state
//! is a newtype around a signal and is written through its own setters.

use std::rc::Rc;

use classroom_client::{KeyValueStore, NameStore, StorageError, VideoProvider};
use classroom_types::{Location, UserMode};
use dioxus::prelude::*;

/// Longest display name accepted by the name entry modal.
pub const MAX_NAME_LEN: usize = 50;

/// Student / instructor view selected in the header.
#[derive(Clone, Copy, PartialEq)]
pub struct UserModeCtx(pub Signal<UserMode>);

impl UserModeCtx {
    pub fn get(&self) -> UserMode {
        (self.0)()
    }

    pub fn set(mut self, mode: UserMode) {
        if *self.0.peek() != mode {
            log::info!("Switched to {}", mode.label());
            self.0.set(mode);
        }
    }
}

/// Display name used when joining calls. `None` until the user enters one.
#[derive(Clone, Copy, PartialEq)]
pub struct UserNameCtx(pub Signal<Option<String>>);

impl UserNameCtx {
    pub fn get(&self) -> Option<String> {
        self.0.read().clone()
    }

    /// Persist `raw` and make it the current name.
    ///
    /// The in-memory name is updated even when storage fails so the user can
    /// still join; the error is returned for logging.
    pub fn save(mut self, raw: &str) -> Result<String, StorageError> {
        let name = normalize_display_name(raw).ok_or(StorageError::EmptyName)?;
        self.0.set(Some(name.clone()));
        save_username_to_storage(&name)
    }
}

/// Where the user currently is: the lobby or one classroom.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveClassroomCtx(pub Signal<Location>);

impl ActiveClassroomCtx {
    pub fn get(&self) -> Location {
        self.0.read().clone()
    }

    pub fn enter(mut self, classroom_id: u32) {
        log::debug!("Entering classroom {classroom_id}");
        self.0.set(Location::classroom(classroom_id));
    }

    pub fn leave(mut self) {
        self.0.set(Location::lobby());
    }
}

/// The call provider shared by every room view.
#[derive(Clone)]
pub struct ProviderCtx(pub Rc<dyn VideoProvider>);

/// Create the app-wide state and provide it to the component tree.
///
/// Called once from the root component. `make_provider` is only invoked on
/// the first render.
pub fn use_app_state(make_provider: fn() -> Rc<dyn VideoProvider>) {
    let mode = use_signal(UserMode::default);
    let name = use_signal(load_username_from_storage);
    let active = use_signal(Location::lobby);

    use_context_provider(|| UserModeCtx(mode));
    use_context_provider(|| UserNameCtx(name));
    use_context_provider(|| ActiveClassroomCtx(active));
    use_context_provider(|| ProviderCtx(make_provider()));
}

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

pub fn name_store() -> NameStore<BrowserStore> {
    NameStore::new(BrowserStore)
}

/// Read the display name from `window.localStorage` (if present).
pub fn load_username_from_storage() -> Option<String> {
    name_store().load()
}

/// Persist the display name so that it survives page reloads.
pub fn save_username_to_storage(username: &str) -> Result<String, StorageError> {
    name_store().save(username)
}

// -----------------------------------------------------------------------------
// Validation helpers
// -----------------------------------------------------------------------------

/// Trim `raw` and cap it at [`MAX_NAME_LEN`] characters. `None` when blank.
pub fn normalize_display_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_NAME_LEN).collect();
    let name = name.trim_end().to_string();
    (!name.is_empty()).then_some(name)
}
