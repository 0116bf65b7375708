use dioxus::prelude::*;

/// Full-screen overlay announcing a mutual like. Only the continue button
/// closes it.
#[component]
pub fn MatchNotification(name: String, on_continue: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "match-notification",
            style: "z-index: 2000",
            div {
                class: "match-notification-card",
                h2 { "It's a Match!" }
                p {
                    "You and "
                    strong { "{name}" }
                    " liked each other."
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_continue.call(()),
                    "Continue Swiping"
                }
            }
        }
    }
}
