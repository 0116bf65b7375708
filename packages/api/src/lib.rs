//! # API crate: typed client for the BrainBuddy matching backend
//!
//! Every page of the client talks to the backend through the [`MatchingApi`]
//! trait. [`HttpApi`] is the real implementation (a `reqwest` client, which
//! uses the browser's `fetch` on WASM); tests substitute scripted fakes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Request/response bodies (`SwipeRequest`, `SwipeResult`, `LoginRequest`, `RegistrationRequest`, `AuthResponse`) |
//! | `error` | [`ApiError`]: transport, status and decode failures |
//!
//! ## Endpoints
//!
//! All paths are relative to [`store::ClientConfig`]'s `api.base_url`.
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | [`next_candidate`](MatchingApi::next_candidate) | `GET /swipes/potential/{userId}` | `Some(profile)`, or `None` on 404 |
//! | [`record_swipe`](MatchingApi::record_swipe) | `POST /swipes` | [`SwipeResult`] |
//! | [`list_matches`](MatchingApi::list_matches) | `GET /matches/user/{userId}` | `Vec<MatchInfo>` |
//! | [`login`](MatchingApi::login) | `POST /auth/login` | [`AuthResponse`] |
//! | [`register`](MatchingApi::register) | `POST /auth/register` | [`AuthResponse`] |
//! | [`email_taken`](MatchingApi::email_taken) | `GET /auth/check-email?email=` | `true` when already registered |
//!
//! ## Status handling
//!
//! The mapping from `(status, body)` to a result is done by small pure
//! functions (`candidate_from_response` and friends) so it can be tested
//! without a server:
//!
//! - the candidate endpoint treats 404 as "no more candidates";
//! - the swipe endpoint reports `success: false` inside a 2xx body; any
//!   other status is a failure even when the body is readable;
//! - the auth endpoints always decode the body, whatever the status;
//! - everything else turns a non-2xx status into [`ApiError::Status`].

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

mod error;
pub mod models;

pub use error::ApiError;
pub use models::{AuthResponse, LoginRequest, RegistrationRequest, SwipeRequest, SwipeResult};
pub use store::{ClientConfig, MatchInfo, Session, UserProfile};

/// Calls the client makes against the matching backend.
pub trait MatchingApi {
    fn next_candidate(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Option<UserProfile>, ApiError>>;
    fn record_swipe(
        &self,
        swipe: &SwipeRequest,
    ) -> impl Future<Output = Result<SwipeResult, ApiError>>;
    fn list_matches(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<MatchInfo>, ApiError>>;
    fn login(
        &self,
        credentials: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        registration: &RegistrationRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn email_taken(&self, email: &str) -> impl Future<Output = Result<bool, ApiError>>;
}

impl<T: MatchingApi> MatchingApi for &T {
    fn next_candidate(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Option<UserProfile>, ApiError>> {
        (**self).next_candidate(user_id)
    }
    fn record_swipe(
        &self,
        swipe: &SwipeRequest,
    ) -> impl Future<Output = Result<SwipeResult, ApiError>> {
        (**self).record_swipe(swipe)
    }
    fn list_matches(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<MatchInfo>, ApiError>> {
        (**self).list_matches(user_id)
    }
    fn login(
        &self,
        credentials: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> {
        (**self).login(credentials)
    }
    fn register(
        &self,
        registration: &RegistrationRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>> {
        (**self).register(registration)
    }
    fn email_taken(&self, email: &str) -> impl Future<Output = Result<bool, ApiError>> {
        (**self).email_taken(email)
    }
}

/// HTTP implementation of [`MatchingApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<(u16, String), ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }
}

impl MatchingApi for HttpApi {
    async fn next_candidate(&self, user_id: i64) -> Result<Option<UserProfile>, ApiError> {
        let (status, body) = self.get(&format!("/swipes/potential/{user_id}")).await?;
        candidate_from_response(status, &body)
    }

    async fn record_swipe(&self, swipe: &SwipeRequest) -> Result<SwipeResult, ApiError> {
        let (status, body) = self.post("/swipes", swipe).await?;
        swipe_result_from_response(status, &body)
    }

    async fn list_matches(&self, user_id: i64) -> Result<Vec<MatchInfo>, ApiError> {
        let (status, body) = self.get(&format!("/matches/user/{user_id}")).await?;
        decode_success(status, &body)
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let (_, body) = self.post("/auth/login", credentials).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn register(&self, registration: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
        let (_, body) = self.post("/auth/register", registration).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn email_taken(&self, email: &str) -> Result<bool, ApiError> {
        let response = self
            .client
            .get(self.url("/auth/check-email"))
            .query(&[("email", email)])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_success(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode_success<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        tracing::debug!("backend answered {status}: {body}");
        return Err(ApiError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// 404 means the backend has no unseen user left for this swiper.
pub fn candidate_from_response(status: u16, body: &str) -> Result<Option<UserProfile>, ApiError> {
    if status == 404 {
        return Ok(None);
    }
    decode_success(status, body).map(Some)
}

/// Only a 2xx body is a reported outcome; `success: false` is honoured there.
pub fn swipe_result_from_response(status: u16, body: &str) -> Result<SwipeResult, ApiError> {
    decode_success(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_404_is_exhausted() {
        assert!(matches!(candidate_from_response(404, ""), Ok(None)));
    }

    #[test]
    fn test_candidate_success_decodes_profile() {
        let profile = candidate_from_response(200, r#"{"id":2,"name":"Jane Smith","bio":null}"#)
            .unwrap()
            .unwrap();
        assert_eq!(profile.id, 2);
        assert_eq!(profile.name, "Jane Smith");
    }

    #[test]
    fn test_candidate_server_error_is_status() {
        assert!(matches!(
            candidate_from_response(500, "oops"),
            Err(ApiError::Status(500))
        ));
    }

    #[test]
    fn test_candidate_garbage_body_is_decode_error() {
        assert!(matches!(
            candidate_from_response(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_unsuccessful_swipe_in_ok_body_keeps_message() {
        let result = swipe_result_from_response(
            200,
            r#"{"success":false,"isMatch":false,"message":"User has already swiped on this target"}"#,
        )
        .unwrap();
        assert!(!result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("User has already swiped on this target")
        );
    }

    #[test]
    fn test_swipe_bad_request_is_status_even_with_body() {
        assert!(matches!(
            swipe_result_from_response(
                400,
                r#"{"success":false,"isMatch":false,"message":"User has already swiped on this target"}"#,
            ),
            Err(ApiError::Status(400))
        ));
    }

    #[test]
    fn test_swipe_error_without_body_is_status() {
        assert!(matches!(
            swipe_result_from_response(502, "Bad Gateway"),
            Err(ApiError::Status(502))
        ));
    }

    #[test]
    fn test_empty_match_list() {
        let matches: Vec<MatchInfo> = decode_success(200, "[]").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_email_check_decodes_boolean() {
        assert!(decode_success::<bool>(200, "true").unwrap());
        assert!(!decode_success::<bool>(200, "false").unwrap());
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://localhost:8080/api/\"\n").unwrap();
        let api = HttpApi::new(&config);
        assert_eq!(
            api.url("/swipes/potential/3"),
            "http://localhost:8080/api/swipes/potential/3"
        );
    }
}
