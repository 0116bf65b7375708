//! Sign-in page.

use dioxus::prelude::*;
use ui::auth_form::UNEXPECTED_ERROR;
use ui::components::{AuthStyles, FormField, GeneralError, SubmitButton};
use ui::validation::{validate_email, validate_password};
use ui::{
    already_signed_in, submit_form, use_api, use_session_store, AuthOutcome, BusyGuard,
    FieldErrors, LoginForm,
};

use crate::Route;

/// Sign-in page. A visitor with a stored session goes straight to the main page.
#[component]
pub fn Login() -> Element {
    let store = use_session_store();
    let nav = use_navigator();

    if already_signed_in(store.store()) {
        nav.replace(Route::Swipe {});
        return rsx! {};
    }

    rsx! {
        LoginCard {}
    }
}

#[component]
fn LoginCard() -> Element {
    let store = use_session_store();
    let api = use_api();
    let nav = use_navigator();

    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut general = use_signal(|| Option::<String>::None);
    let busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let store = store.clone();
        let api = api.clone();
        spawn(async move {
            general.set(None);
            let _busy = BusyGuard::engage(busy);

            let outcome = submit_form(&form(), &api, store.store()).await;
            errors.set(outcome.field_errors());
            match outcome {
                AuthOutcome::Invalid(_) => {}
                AuthOutcome::Rejected(message) => general.set(Some(message)),
                AuthOutcome::Failed => general.set(Some(UNEXPECTED_ERROR.to_string())),
                AuthOutcome::SignedIn(_) => {
                    nav.replace(Route::Swipe {});
                }
            }
        });
    };

    rsx! {
        AuthStyles {}

        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "BrainBuddy" }
                p { class: "auth-subtitle", "Sign in to find your study partner" }

                form {
                    novalidate: true,
                    onsubmit: handle_submit,

                    FormField {
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        value: form().email,
                        error: errors().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        onblur: move |_: FocusEvent| {
                            errors.write().email = validate_email(&form().email).err();
                        },
                    }

                    FormField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: form().password,
                        error: errors().password,
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            errors.write().password = validate_password(&value).err();
                            form.write().password = value;
                        },
                    }

                    GeneralError { message: general() }
                    SubmitButton { label: "Sign In", busy: busy() }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Sign up" }
                }
            }
        }
    }
}
