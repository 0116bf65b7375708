//! Form building blocks shared by the sign-in and sign-up pages.

use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Stylesheet for the auth pages.
#[component]
pub fn AuthStyles() -> Element {
    rsx! {
        document::Stylesheet { href: AUTH_CSS }
    }
}

/// Message under a field; renders nothing when the field is valid.
#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    rsx! {
        span {
            class: "field-error",
            if let Some(message) = message {
                "{message}"
            }
        }
    }
}

/// A labelled input with its error line.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: EventHandler<FormEvent>,
    onblur: Option<EventHandler<FocusEvent>>,
    #[props(default = "")] placeholder: &'static str,
) -> Element {
    let class = if error.is_some() { "invalid" } else { "" };
    rsx! {
        div {
            class: "form-group",
            label { r#for: id, "{label}" }
            input {
                id: id,
                class: class,
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt| oninput.call(evt),
                onblur: move |evt| {
                    if let Some(handler) = onblur {
                        handler.call(evt);
                    }
                },
            }
            FieldError { message: error }
        }
    }
}

/// Submit button that swaps its label for a spinner while busy.
#[component]
pub fn SubmitButton(label: &'static str, busy: bool) -> Element {
    rsx! {
        button {
            class: "btn btn-primary btn-submit",
            r#type: "submit",
            disabled: busy,
            if busy {
                span { class: "btn-spinner" }
            } else {
                span { class: "btn-text", "{label}" }
            }
        }
    }
}

/// General error region of a form.
#[component]
pub fn GeneralError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "general-error", "{message}" }
        },
        None => rsx! {},
    }
}
