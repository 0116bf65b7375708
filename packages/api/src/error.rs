use thiserror::Error;

/// Failure talking to the matching backend.
///
/// Every variant is a transport-level problem from the client's point of view.
/// An explicit `success: false` answer is not an error; it comes back as the
/// decoded response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("successful response is missing `{0}`")]
    MissingField(&'static str),
}
