//! This crate contains the page controllers and shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub mod state;
pub use state::{sleep_ms, BusyGuard, StateHandle};

pub mod validation;
pub use validation::BioCounter;

pub mod swipe;
pub use swipe::{SwipeController, SwipeState, SwipeView};

pub mod auth_form;
pub use auth_form::{
    check_email, submit_form, AuthOutcome, CredentialForm, FieldErrors, LoginForm, RegisterForm,
};

mod session;
pub use session::{
    already_signed_in, gate_main_page, logout, use_api, use_client_config, use_session_store,
    ClientProvider, Gate, SessionHandle,
};

mod matches;
pub use matches::{format_match_date, MatchList, NO_MATCHES};

mod navbar;
pub use navbar::Navbar;
