//! # Sign-in and sign-up forms
//!
//! [`LoginForm`] and [`RegisterForm`] are two small value types sharing the
//! [`CredentialForm`] protocol: validate every field, post the payload, and on
//! success hand back a session. [`submit_form`] runs that protocol and stores
//! the session through the injected [`SessionStore`]; the page only maps the
//! returned [`AuthOutcome`] to what it shows.
//!
//! Field errors ([`FieldErrors`]) and the general error region are separate:
//! a rejected or failed submission never clears field errors and vice versa.

use std::future::Future;

use api::{ApiError, AuthResponse, LoginRequest, MatchingApi, RegistrationRequest, Session};
use store::SessionStore;

use crate::validation::{
    validate_bio, validate_email, validate_name, validate_password, FieldResult,
};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";
pub const EMAIL_TAKEN: &str = "This email is already registered";
pub const REGISTERED_NOTICE: &str = "Account created successfully! Redirecting...";

/// Per-field messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub bio: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.bio.is_none()
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend answered `success: false`.
    Rejected(String),
    /// Network, status or decode failure.
    Failed,
    /// The session has been stored.
    SignedIn(Session),
}

impl AuthOutcome {
    /// Field errors from the validation run of this submit.
    ///
    /// Every outcome other than `Invalid` passed validation, so pages set
    /// this unconditionally and stale messages from blur checks go away.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            AuthOutcome::Invalid(errors) => errors.clone(),
            _ => FieldErrors::default(),
        }
    }
}

/// Shared protocol of the two auth forms.
pub trait CredentialForm {
    /// General error shown when the backend rejects without a message.
    const REJECTED_FALLBACK: &'static str;

    fn validate(&self) -> FieldErrors;

    fn submit<A: MatchingApi>(&self, api: &A) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl CredentialForm for LoginForm {
    const REJECTED_FALLBACK: &'static str = "Login failed";

    fn validate(&self) -> FieldErrors {
        FieldErrors {
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
            ..Default::default()
        }
    }

    async fn submit<A: MatchingApi>(&self, api: &A) -> Result<AuthResponse, ApiError> {
        api.login(&self.request()).await
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

impl RegisterForm {
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            bio: self.bio.trim().to_string(),
        }
    }
}

impl CredentialForm for RegisterForm {
    const REJECTED_FALLBACK: &'static str = "Registration failed";

    fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
            bio: validate_bio(&self.bio).err(),
        }
    }

    async fn submit<A: MatchingApi>(&self, api: &A) -> Result<AuthResponse, ApiError> {
        api.register(&self.request()).await
    }
}

/// Validate, post and store the session.
pub async fn submit_form<F, A, S>(form: &F, api: &A, store: &S) -> AuthOutcome
where
    F: CredentialForm,
    A: MatchingApi,
    S: SessionStore + ?Sized,
{
    let errors = form.validate();
    if !errors.is_empty() {
        return AuthOutcome::Invalid(errors);
    }

    let response = match form.submit(api).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Auth error: {e}");
            return AuthOutcome::Failed;
        }
    };

    if !response.success {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| F::REJECTED_FALLBACK.to_string());
        return AuthOutcome::Rejected(message);
    }

    let session = match response.into_session() {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Auth error: {e}");
            return AuthOutcome::Failed;
        }
    };
    if let Err(e) = store.set(&session) {
        tracing::error!("Failed to store session: {e}");
        return AuthOutcome::Failed;
    }

    tracing::info!("Signed in as user {}", session.user.id);
    AuthOutcome::SignedIn(session)
}

/// Email check run when the sign-up email field loses focus.
///
/// Shape errors come back without a request. A failed availability request is
/// logged and treated as available.
pub async fn check_email<A: MatchingApi>(api: &A, email: &str) -> FieldResult {
    validate_email(email)?;
    match api.email_taken(email.trim()).await {
        Ok(true) => Err(EMAIL_TAKEN),
        Ok(false) => Ok(()),
        Err(e) => {
            tracing::error!("Error checking email: {e}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MatchInfo, SwipeRequest, SwipeResult, UserProfile};
    use std::cell::{Cell, RefCell};
    use store::MemorySessionStore;

    /// Fake auth backend: one canned answer per endpoint, with call capture.
    #[derive(Default)]
    struct AuthApi {
        answer: RefCell<Option<Result<AuthResponse, ApiError>>>,
        taken: Cell<Option<bool>>,
        logins: RefCell<Vec<LoginRequest>>,
        registrations: RefCell<Vec<RegistrationRequest>>,
        email_checks: Cell<usize>,
    }

    impl AuthApi {
        fn answering(answer: Result<AuthResponse, ApiError>) -> Self {
            Self {
                answer: RefCell::new(Some(answer)),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.logins.borrow().len() + self.registrations.borrow().len()
        }

        fn take_answer(&self) -> Result<AuthResponse, ApiError> {
            self.answer.borrow_mut().take().unwrap_or(Err(ApiError::Status(500)))
        }
    }

    impl MatchingApi for AuthApi {
        async fn next_candidate(&self, _: i64) -> Result<Option<UserProfile>, ApiError> {
            unreachable!()
        }

        async fn record_swipe(&self, _: &SwipeRequest) -> Result<SwipeResult, ApiError> {
            unreachable!()
        }

        async fn list_matches(&self, _: i64) -> Result<Vec<MatchInfo>, ApiError> {
            unreachable!()
        }

        async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
            self.logins.borrow_mut().push(credentials.clone());
            self.take_answer()
        }

        async fn register(&self, registration: &RegistrationRequest) -> Result<AuthResponse, ApiError> {
            self.registrations.borrow_mut().push(registration.clone());
            self.take_answer()
        }

        async fn email_taken(&self, _: &str) -> Result<bool, ApiError> {
            self.email_checks.set(self.email_checks.get() + 1);
            self.taken.get().ok_or(ApiError::Status(500))
        }
    }

    fn signed_in(id: i64, name: &str) -> Result<AuthResponse, ApiError> {
        Ok(AuthResponse {
            success: true,
            message: Some("Login successful".to_string()),
            user: Some(UserProfile {
                id,
                name: name.to_string(),
                bio: None,
            }),
            token: Some("dummy-token".to_string()),
        })
    }

    fn rejected(message: Option<&str>) -> Result<AuthResponse, ApiError> {
        Ok(AuthResponse {
            success: false,
            message: message.map(str::to_string),
            ..Default::default()
        })
    }

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn register(name: &str, email: &str, password: &str, bio: &str) -> RegisterForm {
        RegisterForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            bio: bio.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_stores_session() {
        let api = AuthApi::answering(signed_in(1, "John Doe"));
        let store = MemorySessionStore::new();

        let outcome = submit_form(&login(" john@example.com ", "secret1"), &api, &store).await;

        let AuthOutcome::SignedIn(session) = outcome else {
            panic!("expected sign-in");
        };
        assert_eq!(session.user.name, "John Doe");
        assert_eq!(store.get().unwrap(), Some(session));
        assert_eq!(
            api.logins.borrow().as_slice(),
            &[LoginRequest {
                email: "john@example.com".to_string(),
                password: "secret1".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_invalid_email_blocks_submission() {
        let api = AuthApi::answering(signed_in(1, "John Doe"));
        let store = MemorySessionStore::new();

        let outcome = submit_form(&login("john.example.com", "long enough"), &api, &store).await;

        let AuthOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.password, None);
        assert_eq!(api.calls(), 0);
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_password_boundary_gates_submission() {
        let store = MemorySessionStore::new();

        let short = AuthApi::answering(signed_in(1, "John Doe"));
        let outcome = submit_form(&login("a@b.co", "12345"), &short, &store).await;
        assert!(matches!(outcome, AuthOutcome::Invalid(_)));
        assert_eq!(short.calls(), 0);

        let exact = AuthApi::answering(signed_in(1, "John Doe"));
        let outcome = submit_form(&login("a@b.co", "123456"), &exact, &store).await;
        assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
        assert_eq!(exact.calls(), 1);
    }

    #[tokio::test]
    async fn test_rejection_shows_server_message() {
        let api = AuthApi::answering(rejected(Some("Invalid email or password")));
        let store = MemorySessionStore::new();

        let outcome = submit_form(&login("a@b.co", "wrongpass"), &api, &store).await;

        assert_eq!(
            outcome,
            AuthOutcome::Rejected("Invalid email or password".to_string())
        );
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_form_fallback() {
        let store = MemorySessionStore::new();

        let api = AuthApi::answering(rejected(None));
        let outcome = submit_form(&login("a@b.co", "wrongpass"), &api, &store).await;
        assert_eq!(outcome, AuthOutcome::Rejected("Login failed".to_string()));

        let api = AuthApi::answering(rejected(Some("")));
        let form = register("Jane Smith", "jane@uni.edu", "secret1", "");
        let outcome = submit_form(&form, &api, &store).await;
        assert_eq!(outcome, AuthOutcome::Rejected("Registration failed".to_string()));
    }

    #[tokio::test]
    async fn test_valid_submit_clears_field_errors() {
        let api = AuthApi::answering(rejected(Some("Email already exists")));
        let store = MemorySessionStore::new();
        let mut form = register("J", "jane@uni.edu", "secret1", "");

        let first = submit_form(&form, &api, &store).await;
        assert_eq!(
            first.field_errors().name,
            Some("Name must be at least 2 characters long")
        );

        form.name = "Jo".to_string();
        let second = submit_form(&form, &api, &store).await;
        assert_eq!(second, AuthOutcome::Rejected("Email already exists".to_string()));
        assert!(second.field_errors().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let api = AuthApi::answering(Err(ApiError::Status(502)));
        let store = MemorySessionStore::new();

        let outcome = submit_form(&login("a@b.co", "secret1"), &api, &store).await;

        assert_eq!(outcome, AuthOutcome::Failed);
    }

    #[tokio::test]
    async fn test_success_without_token_is_a_failure() {
        let mut answer = signed_in(1, "John Doe").unwrap();
        answer.token = None;
        let api = AuthApi::answering(Ok(answer));
        let store = MemorySessionStore::new();

        let outcome = submit_form(&login("a@b.co", "secret1"), &api, &store).await;

        assert_eq!(outcome, AuthOutcome::Failed);
        assert!(store.get().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_register_validates_every_field() {
        let api = AuthApi::default();
        let store = MemorySessionStore::new();
        let form = register("J", "bad", "123", &"x".repeat(501));

        let AuthOutcome::Invalid(errors) = submit_form(&form, &api, &store).await else {
            panic!("expected validation failure");
        };

        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert_eq!(errors.bio, Some("Bio cannot exceed 500 characters"));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_register_name_boundaries() {
        let store = MemorySessionStore::new();
        for (name, ok) in [
            ("J".to_string(), false),
            ("Jo".to_string(), true),
            ("n".repeat(50), true),
            ("n".repeat(51), false),
        ] {
            let api = AuthApi::answering(signed_in(5, "New User"));
            let form = register(&name, "new@uni.edu", "secret1", "");
            let outcome = submit_form(&form, &api, &store).await;
            assert_eq!(matches!(outcome, AuthOutcome::SignedIn(_)), ok, "name length {}", name.len());
        }
    }

    #[tokio::test]
    async fn test_register_sends_trimmed_payload() {
        let api = AuthApi::answering(signed_in(5, "Jane Smith"));
        let store = MemorySessionStore::new();
        let form = register("  Jane Smith ", " jane@uni.edu", "pass word", "  Math enthusiast  ");

        let outcome = submit_form(&form, &api, &store).await;

        assert!(matches!(outcome, AuthOutcome::SignedIn(_)));
        assert_eq!(
            api.registrations.borrow().as_slice(),
            &[RegistrationRequest {
                name: "Jane Smith".to_string(),
                email: "jane@uni.edu".to_string(),
                password: "pass word".to_string(),
                bio: "Math enthusiast".to_string(),
            }]
        );
        assert_eq!(store.get().unwrap().map(|s| s.user.id), Some(5));
    }

    #[tokio::test]
    async fn test_email_check_flags_taken_address() {
        let api = AuthApi::default();
        api.taken.set(Some(true));
        assert_eq!(check_email(&api, "john@example.com").await, Err(EMAIL_TAKEN));

        api.taken.set(Some(false));
        assert_eq!(check_email(&api, "john@example.com").await, Ok(()));
        assert_eq!(api.email_checks.get(), 2);
    }

    #[tokio::test]
    async fn test_email_check_skips_request_for_bad_shape() {
        let api = AuthApi::default();
        assert_eq!(
            check_email(&api, "not-an-email").await,
            Err("Please enter a valid email address")
        );
        assert_eq!(api.email_checks.get(), 0);
    }

    #[tokio::test]
    async fn test_email_check_failure_is_ignored() {
        let api = AuthApi::default();
        assert_eq!(check_email(&api, "john@example.com").await, Ok(()));
    }
}
