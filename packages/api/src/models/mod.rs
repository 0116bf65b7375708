//! Request and response bodies of the matching backend.

mod auth;
mod swipe;

pub use auth::{AuthResponse, LoginRequest, RegistrationRequest};
pub use swipe::{SwipeRequest, SwipeResult};
