use dioxus::prelude::*;
use store::UserProfile;

use crate::icons::{FaHeart, FaXmark};
use crate::Icon;

/// The current candidate with pass/like controls.
#[component]
pub fn ProfileCard(
    profile: UserProfile,
    disabled: bool,
    on_pass: EventHandler<()>,
    on_like: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "profile-card",
            div {
                class: "profile-info",
                h2 { "{profile.name}" }
                p { "{profile.bio_or_placeholder()}" }
            }
            div {
                class: "swipe-buttons",
                button {
                    class: "swipe-btn pass-btn",
                    title: "Pass",
                    disabled: disabled,
                    onclick: move |_| on_pass.call(()),
                    Icon { icon: FaXmark, width: 22, height: 22 }
                }
                button {
                    class: "swipe-btn like-btn",
                    title: "Like",
                    disabled: disabled,
                    onclick: move |_| on_like.call(()),
                    Icon { icon: FaHeart, width: 22, height: 22 }
                }
            }
        }
    }
}
