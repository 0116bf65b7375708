//! # Session persistence
//!
//! A [`Session`] is stored as two string entries in a key/value store:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`CURRENT_USER_KEY`] (`"currentUser"`) | JSON of the signed-in [`UserProfile`] |
//! | [`AUTH_TOKEN_KEY`] (`"authToken"`) | opaque token string |
//!
//! Both entries are written together by [`SessionStore::set`] and removed
//! together by [`SessionStore::clear`]. Implementations only provide the three
//! raw string operations; the encoding lives in the provided methods so every
//! backend ([`crate::MemorySessionStore`], [`crate::LocalStorageStore`]) reads and
//! writes the same format.
//!
//! The client never checks expiry. A session stays until logout.

use thiserror::Error;

use crate::models::UserProfile;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// The locally stored identity/token pair of a signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored user entry is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("stored session has a user but no token")]
    MissingToken,
    #[error("failed to encode user: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Synchronous key/value store holding the session entries.
pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;

    /// Load the stored session.
    ///
    /// `Ok(None)` when no user entry exists. A user entry that does not parse,
    /// or that has no token next to it, is an error.
    fn get(&self) -> Result<Option<Session>, SessionError> {
        let Some(raw) = self.read(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        let user: UserProfile = serde_json::from_str(&raw).map_err(SessionError::Malformed)?;
        let token = self
            .read(AUTH_TOKEN_KEY)?
            .ok_or(SessionError::MissingToken)?;
        Ok(Some(Session { user, token }))
    }

    /// Store both entries of `session`.
    fn set(&self, session: &Session) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user).map_err(SessionError::Encode)?;
        self.write(CURRENT_USER_KEY, &user)?;
        self.write(AUTH_TOKEN_KEY, &session.token)
    }

    /// Remove both entries.
    fn clear(&self) -> Result<(), SessionError> {
        self.remove(CURRENT_USER_KEY)?;
        self.remove(AUTH_TOKEN_KEY)
    }
}
