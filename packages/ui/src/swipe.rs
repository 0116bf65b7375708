//! # Swipe loop
//!
//! The main page is an explicit state machine. [`SwipeState`] holds exactly
//! one base [`SwipeView`] plus the match notification overlay, and
//! [`SwipeController`] drives the transitions against a [`MatchingApi`]:
//!
//! | Action | Network call | Resulting view |
//! |--------|--------------|----------------|
//! | [`load_next_profile`](SwipeController::load_next_profile) | next candidate | `Swipe` with the candidate, `NoMoreProfiles` on 404, `Error` otherwise |
//! | [`swipe`](SwipeController::swipe) | record swipe | overlay on a match, one chained candidate fetch on a plain success, `Error` on rejection or failure |
//! | [`show_matches`](SwipeController::show_matches) | list matches | `Matches(list)` or `Error` |
//! | [`continue_after_match`](SwipeController::continue_after_match) | next candidate | closes the overlay, then as `load_next_profile` |
//! | [`back_to_swipe`](SwipeController::back_to_swipe) | none | `Swipe` with the candidate still held |
//!
//! `Loading` is entered before every call. While a call is in flight further
//! actions are ignored, so a double click cannot record the same decision
//! twice.

use api::{ApiError, MatchInfo, MatchingApi, SwipeRequest, SwipeResult, UserProfile};

use crate::state::StateHandle;

pub const LOAD_PROFILE_FAILED: &str = "Failed to load next profile. Please try again.";
pub const SWIPE_REJECTED: &str = "Failed to record swipe";
pub const SWIPE_FAILED: &str = "Failed to record swipe. Please try again.";
pub const LOAD_MATCHES_FAILED: &str = "Failed to load matches. Please try again.";

/// The base region visible on the main page.
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeView {
    Loading,
    /// Candidate card with like/pass; the candidate is [`SwipeState::current`].
    Swipe,
    Matches(Vec<MatchInfo>),
    NoMoreProfiles,
    /// Shown with a retry action that fetches the next candidate.
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeState {
    pub view: SwipeView,
    /// Candidate awaiting a decision.
    pub current: Option<UserProfile>,
    /// Name shown by the match notification overlay while it is open.
    pub matched_with: Option<String>,
    pub in_flight: bool,
}

impl Default for SwipeState {
    fn default() -> Self {
        Self {
            view: SwipeView::Loading,
            current: None,
            matched_with: None,
            in_flight: false,
        }
    }
}

/// What the controller does after a swipe response has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FollowUp {
    Stop,
    FetchNext,
}

impl SwipeState {
    /// Whether the like/pass controls accept input.
    pub fn can_swipe(&self) -> bool {
        !self.in_flight
            && self.matched_with.is_none()
            && self.view == SwipeView::Swipe
            && self.current.is_some()
    }

    fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.view = SwipeView::Loading;
        true
    }

    fn finish(&mut self, view: SwipeView) {
        self.in_flight = false;
        self.view = view;
    }

    fn begin_candidate_fetch(&mut self) -> bool {
        if !self.begin() {
            return false;
        }
        self.current = None;
        true
    }

    fn apply_candidate(&mut self, outcome: Result<Option<UserProfile>, ApiError>) {
        match outcome {
            Ok(Some(profile)) => {
                self.current = Some(profile);
                self.finish(SwipeView::Swipe);
            }
            Ok(None) => self.finish(SwipeView::NoMoreProfiles),
            Err(_) => self.finish(SwipeView::Error(LOAD_PROFILE_FAILED.to_string())),
        }
    }

    fn begin_swipe(&mut self) -> Option<UserProfile> {
        if !self.can_swipe() {
            return None;
        }
        let target = self.current.clone()?;
        self.begin();
        Some(target)
    }

    fn apply_swipe(&mut self, target: &UserProfile, outcome: Result<SwipeResult, ApiError>) -> FollowUp {
        match outcome {
            Ok(result) if result.success && result.is_match => {
                self.current = None;
                self.matched_with = Some(target.name.clone());
                self.finish(SwipeView::Swipe);
                FollowUp::Stop
            }
            Ok(result) if result.success => {
                self.current = None;
                self.in_flight = false;
                FollowUp::FetchNext
            }
            Ok(result) => {
                let message = result
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SWIPE_REJECTED.to_string());
                self.finish(SwipeView::Error(message));
                FollowUp::Stop
            }
            Err(_) => {
                self.finish(SwipeView::Error(SWIPE_FAILED.to_string()));
                FollowUp::Stop
            }
        }
    }

    fn apply_matches(&mut self, outcome: Result<Vec<MatchInfo>, ApiError>) {
        match outcome {
            Ok(matches) => self.finish(SwipeView::Matches(matches)),
            Err(_) => self.finish(SwipeView::Error(LOAD_MATCHES_FAILED.to_string())),
        }
    }
}

/// Runs the swipe loop for the signed-in `user`.
pub struct SwipeController<A, H> {
    api: A,
    user: UserProfile,
    state: H,
}

impl<A, H> SwipeController<A, H>
where
    A: MatchingApi,
    H: StateHandle<SwipeState>,
{
    pub fn new(api: A, user: UserProfile, state: H) -> Self {
        Self { api, user, state }
    }

    pub async fn load_next_profile(&mut self) {
        if !self.state.update(SwipeState::begin_candidate_fetch) {
            return;
        }
        let outcome = self.api.next_candidate(self.user.id).await;
        match &outcome {
            Ok(None) => tracing::info!("no more candidates for user {}", self.user.id),
            Err(e) => tracing::error!("Error loading profile: {e}"),
            Ok(Some(_)) => {}
        }
        self.state.update(|s| s.apply_candidate(outcome));
    }

    pub async fn swipe(&mut self, liked: bool) {
        let Some(target) = self.state.update(SwipeState::begin_swipe) else {
            return;
        };
        let request = SwipeRequest::new(self.user.id, target.id, liked);
        let outcome = self.api.record_swipe(&request).await;
        if let Err(e) = &outcome {
            tracing::error!("Error recording swipe: {e}");
        }
        let follow_up = self.state.update(|s| s.apply_swipe(&target, outcome));
        if follow_up == FollowUp::FetchNext {
            self.load_next_profile().await;
        }
    }

    pub async fn show_matches(&mut self) {
        if !self.state.update(SwipeState::begin) {
            return;
        }
        let outcome = self.api.list_matches(self.user.id).await;
        if let Err(e) = &outcome {
            tracing::error!("Error loading matches: {e}");
        }
        self.state.update(|s| s.apply_matches(outcome));
    }

    /// Dismiss the match notification and fetch a fresh candidate.
    pub async fn continue_after_match(&mut self) {
        self.state.update(|s| s.matched_with = None);
        self.load_next_profile().await;
    }

    /// Return from the match list without refetching.
    pub fn back_to_swipe(&mut self) {
        self.state.update(|s| {
            if !s.in_flight {
                s.view = SwipeView::Swipe;
            }
        });
    }

    /// Retry action offered by the error view.
    pub async fn retry(&mut self) {
        self.load_next_profile().await;
    }
}
