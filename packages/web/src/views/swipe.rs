//! Main page: session gate, swipe loop and match list.

use api::{HttpApi, Session, UserProfile};
use dioxus::prelude::*;
use ui::views::{ErrorPanel, MatchNotification, NoMoreProfiles, ProfileCard, Spinner};
use ui::{
    gate_main_page, logout, use_api, use_session_store, Gate, MatchList, Navbar, SwipeController,
    SwipeState, SwipeView,
};

use crate::Route;

#[derive(Clone, Copy, Debug)]
enum Action {
    LoadNext,
    Like,
    Pass,
    ShowMatches,
    Continue,
    BackToSwipe,
    Retry,
}

type Client = Signal<(HttpApi, UserProfile)>;

/// Main page. Redirects to sign-in unless a readable session is stored.
#[component]
pub fn Swipe() -> Element {
    let store = use_session_store();
    let nav = use_navigator();

    match gate_main_page(store.store()) {
        Gate::Enter(session) => rsx! {
            SwipeApp { session }
        },
        Gate::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}

#[component]
fn SwipeApp(session: Session) -> Element {
    let store = use_session_store();
    let nav = use_navigator();
    let api = use_api();
    let user = session.user.clone();
    let client: Client = use_signal(move || (api, user));
    let state = use_signal(SwipeState::default);

    // First candidate on mount
    use_hook(move || dispatch(client, state, Action::LoadNext));

    let on_logout = move |_| {
        logout(store.store());
        nav.replace(Route::Login {});
    };

    let current = state();

    rsx! {
        Navbar { user_name: session.user.name.clone(), on_logout }

        main {
            class: "main-content",
            {render_view(&current, client, state)}
        }

        if let Some(name) = current.matched_with.clone() {
            MatchNotification {
                name,
                on_continue: move |_| dispatch(client, state, Action::Continue),
            }
        }
    }
}

/// Maps the base view to the one region that is visible.
fn render_view(current: &SwipeState, client: Client, state: Signal<SwipeState>) -> Element {
    match &current.view {
        SwipeView::Loading => rsx! {
            Spinner {}
        },
        SwipeView::Swipe => rsx! {
            section {
                class: "swipe-section",
                if let Some(profile) = current.current.clone() {
                    ProfileCard {
                        profile,
                        disabled: !current.can_swipe(),
                        on_pass: move |_| dispatch(client, state, Action::Pass),
                        on_like: move |_| dispatch(client, state, Action::Like),
                    }
                }
                div {
                    class: "section-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: current.in_flight,
                        onclick: move |_| dispatch(client, state, Action::ShowMatches),
                        "View Matches"
                    }
                }
            }
        },
        SwipeView::Matches(matches) => rsx! {
            section {
                class: "matches-section",
                h2 { "Your Matches" }
                MatchList { matches: matches.clone() }
                div {
                    class: "section-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| dispatch(client, state, Action::BackToSwipe),
                        "Back to Swiping"
                    }
                }
            }
        },
        SwipeView::NoMoreProfiles => rsx! {
            NoMoreProfiles {
                on_view_matches: move |_| dispatch(client, state, Action::ShowMatches),
            }
        },
        SwipeView::Error(message) => rsx! {
            ErrorPanel {
                message: message.clone(),
                on_retry: move |_| dispatch(client, state, Action::Retry),
            }
        },
    }
}

fn dispatch(client: Client, state: Signal<SwipeState>, action: Action) {
    let (api, user) = client();
    spawn(async move {
        let mut controller = SwipeController::new(api, user, state);
        match action {
            Action::LoadNext => controller.load_next_profile().await,
            Action::Like => controller.swipe(true).await,
            Action::Pass => controller.swipe(false).await,
            Action::ShowMatches => controller.show_matches().await,
            Action::Continue => controller.continue_after_match().await,
            Action::BackToSwipe => controller.back_to_swipe(),
            Action::Retry => controller.retry().await,
        }
    });
}
