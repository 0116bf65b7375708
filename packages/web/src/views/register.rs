//! Sign-up page with live field checks.

use dioxus::prelude::*;
use ui::auth_form::{REGISTERED_NOTICE, UNEXPECTED_ERROR};
use ui::components::{AuthStyles, FieldError, FormField, GeneralError, SubmitButton};
use ui::validation::{validate_bio, validate_email, validate_name, validate_password};
use ui::{
    check_email, sleep_ms, submit_form, use_api, use_client_config, use_session_store, AuthOutcome,
    BioCounter, BusyGuard, FieldErrors, RegisterForm,
};

use crate::Route;

/// Sign-up page component.
#[component]
pub fn Register() -> Element {
    let store = use_session_store();
    let api = use_api();
    let redirect_ms = use_client_config().auth.register_redirect_ms;
    let nav = use_navigator();

    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut general = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| false);
    let busy = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
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
                        registered.set(true);
                        sleep_ms(redirect_ms).await;
                        nav.replace(Route::Swipe {});
                    }
                }
            });
        }
    };

    // Shape check first, then ask the backend whether the address is free
    let handle_email_blur = move |_: FocusEvent| {
        let email = form().email;
        let api = api.clone();
        spawn(async move {
            let result = check_email(&api, &email).await;
            // Drop a stale answer if the field changed meanwhile
            if form().email == email {
                errors.write().email = result.err();
            }
        });
    };

    if registered() {
        return rsx! {
            AuthStyles {}
            div {
                class: "auth-container",
                div {
                    class: "auth-card",
                    h1 { "BrainBuddy" }
                    div { class: "success-message", "{REGISTERED_NOTICE}" }
                }
            }
        };
    }

    let counter = BioCounter::for_bio(&form().bio);
    let counter_class = if counter.over_limit {
        "char-count over-limit"
    } else {
        "char-count"
    };

    rsx! {
        AuthStyles {}

        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "BrainBuddy" }
                p { class: "auth-subtitle", "Create your account" }

                form {
                    novalidate: true,
                    onsubmit: handle_submit,

                    FormField {
                        id: "name",
                        label: "Name",
                        input_type: "text",
                        value: form().name,
                        error: errors().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        onblur: move |_: FocusEvent| {
                            errors.write().name = validate_name(&form().name).err();
                        },
                    }

                    FormField {
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        value: form().email,
                        error: errors().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        onblur: handle_email_blur,
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

                    div {
                        class: "form-group",
                        label { r#for: "bio", "Bio" }
                        textarea {
                            id: "bio",
                            class: if errors().bio.is_some() { "invalid" } else { "" },
                            rows: "4",
                            placeholder: "Tell potential study partners about yourself",
                            value: form().bio,
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                errors.write().bio = validate_bio(&value).err();
                                form.write().bio = value;
                            },
                        }
                        div { class: counter_class, "{counter.text}" }
                        FieldError { message: errors().bio }
                    }

                    GeneralError { message: general() }
                    SubmitButton { label: "Create Account", busy: busy() }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
