//! Session context and the page gates built on it.

use std::rc::Rc;

use api::HttpApi;
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionStore};

/// The injected session store, shared by every page.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.0.as_ref()
    }
}

/// Get the injected session store.
pub fn use_session_store() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the backend client.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Get the configuration parsed at startup.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

fn make_session_store() -> SessionHandle {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionHandle::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionHandle::new(store::MemorySessionStore::new())
    }
}

/// Provider component for the session store, the config and the backend client.
/// Wrap the router with it.
#[component]
pub fn ClientProvider(children: Element) -> Element {
    use_context_provider(make_session_store);
    let config = use_context_provider(ClientConfig::bundled);
    use_context_provider(move || HttpApi::new(&config));

    rsx! {
        {children}
    }
}

/// Decision taken when the main page mounts.
#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
    Enter(Session),
    RedirectToLogin,
}

/// Fail-closed check for the main page. A stored entry that cannot be read
/// counts as no session.
pub fn gate_main_page<S: SessionStore + ?Sized>(store: &S) -> Gate {
    match store.get() {
        Ok(Some(session)) => Gate::Enter(session),
        Ok(None) => {
            tracing::info!("No stored session, redirecting to sign-in");
            Gate::RedirectToLogin
        }
        Err(e) => {
            tracing::warn!("Ignoring stored session: {e}");
            Gate::RedirectToLogin
        }
    }
}

/// Whether the sign-in page should send the user straight to the main page.
pub fn already_signed_in<S: SessionStore + ?Sized>(store: &S) -> bool {
    matches!(store.get(), Ok(Some(_)))
}

/// Drop both session entries. No server call is made.
pub fn logout<S: SessionStore + ?Sized>(store: &S) {
    if let Err(e) = store.clear() {
        tracing::error!("Failed to clear session: {e}");
    }
}
