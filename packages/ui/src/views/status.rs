use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
            p { "Loading..." }
        }
    }
}

/// Error region with a retry action.
#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-message",
            p { "{message}" }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_retry.call(()),
                "Try Again"
            }
        }
    }
}

/// Empty state once the backend has no candidate left.
#[component]
pub fn NoMoreProfiles(on_view_matches: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "no-more-profiles",
            h2 { "No more profiles" }
            p { "You've seen everyone for now. Check back later!" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_view_matches.call(()),
                "View Matches"
            }
        }
    }
}
