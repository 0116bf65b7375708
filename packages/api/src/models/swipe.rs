use serde::{Deserialize, Serialize};
use store::UserProfile;

/// A like/pass decision on a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    pub swiper_id: i64,
    pub target_id: i64,
    pub liked: bool,
}

impl SwipeRequest {
    pub fn new(swiper_id: i64, target_id: i64, liked: bool) -> Self {
        Self {
            swiper_id,
            target_id,
            liked,
        }
    }
}

/// Outcome of recording a swipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwipeResult {
    pub success: bool,
    #[serde(default)]
    pub is_match: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Sent by the backend but not used; the next candidate is always fetched
    /// explicitly.
    #[serde(default)]
    pub next_potential_match: Option<UserProfile>,
}
