pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use models::{MatchInfo, UserProfile, NO_BIO};
pub use session::{Session, SessionError, SessionStore};
