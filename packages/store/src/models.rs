//! # View models shared by the client pages
//!
//! Plain data structures for the people the client shows. They are
//! `Serialize + Deserialize` with camelCase field names so they map one-to-one
//! onto the JSON the matching backend sends and onto the `currentUser` entry
//! kept in browser storage.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | A user as the backend exposes it: numeric id, display name, optional bio. Used for the signed-in user and for swipe candidates. |
//! | [`MatchInfo`] | One mutual like: the other user's profile and the backend timestamp of the match. |

use serde::{Deserialize, Serialize};

/// Text shown in place of an empty or missing bio.
pub const NO_BIO: &str = "No bio available";

/// Public profile of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserProfile {
    /// The bio to render, falling back to [`NO_BIO`].
    pub fn bio_or_placeholder(&self) -> &str {
        match self.bio.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio,
            _ => NO_BIO,
        }
    }
}

/// A match between the signed-in user and `matched_user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub match_id: Option<i64>,
    pub matched_user: UserProfile,
    /// ISO-8601 local date-time as sent by the backend, e.g. `2024-03-01T18:22:05`.
    #[serde(default)]
    pub matched_at: Option<String>,
}
