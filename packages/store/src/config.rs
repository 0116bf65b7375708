//! # Client configuration (`brainbuddy.toml`)
//!
//! The client has no runtime configuration surface. Its settings come from
//! `brainbuddy.toml` at the root of this package, embedded into the binary at
//! build time and parsed by [`ClientConfig::bundled`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"   # backend origin + /api prefix
//!
//! [auth]
//! register_redirect_ms = 2000               # pause after sign-up before leaving the page
//! ```
//!
//! Every field has a default, so a missing section or an empty file is the
//! same as the default configuration.

use serde::{Deserialize, Serialize};

const BUNDLED: &str = include_str!("../brainbuddy.toml");

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request path is appended to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Auth page behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// How long the sign-up success message stays before navigating away.
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u32,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_register_redirect_ms() -> u32 {
    2000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            register_redirect_ms: default_register_redirect_ms(),
        }
    }
}

impl ClientConfig {
    /// The configuration compiled into the client. Falls back to defaults if
    /// the embedded file does not parse.
    pub fn bundled() -> Self {
        Self::from_toml(BUNDLED).unwrap_or_default()
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
