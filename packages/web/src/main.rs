use dioxus::prelude::*;

use ui::ClientProvider;
use views::{Login, Register, Swipe};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Swipe {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to init logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "BrainBuddy" }

        ClientProvider {
            Router::<Route> {}
        }
    }
}
