use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{SessionError, SessionStore};

/// In-memory SessionStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.entries
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
