use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::Icon;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

/// Header of the main page: app name, signed-in user and logout.
#[component]
pub fn Navbar(user_name: String, on_logout: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: APP_CSS }
        header {
            class: "navbar",
            h1 { class: "navbar-brand", "BrainBuddy" }
            div {
                class: "user-info",
                span { class: "user-name", "Welcome, {user_name}" }
                button {
                    class: "btn btn-logout",
                    title: "Logout",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    " Logout"
                }
            }
        }
    }
}
