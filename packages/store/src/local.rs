//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! It writes the session entries straight into `window.localStorage`, so they
//! survive reloads and are visible to every page of the same origin.
//!
//! The handle is looked up on every call. Tabs sharing the origin are not
//! notified of each other's writes.

use crate::session::{SessionError, SessionStore};

/// `window.localStorage`-backed SessionStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, SessionError> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))
    }
}

impl SessionStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }
}
