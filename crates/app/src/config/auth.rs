//! Auth Config

use clap::Args;

use crate::auth::{DEFAULT_IDENTITY_URL, FirebaseConfig};

/// Identity provider settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Firebase web API key
    #[arg(long, env = "FIREBASE_API_KEY", hide_env_values = true)]
    pub firebase_api_key: Option<String>,

    /// Identity Toolkit base URL
    #[arg(long, env = "FIREBASE_IDENTITY_URL", default_value = DEFAULT_IDENTITY_URL)]
    pub identity_url: String,
}

impl AuthConfig {
    #[must_use]
    pub fn firebase_config(&self) -> FirebaseConfig {
        FirebaseConfig {
            api_key: self.firebase_api_key.clone(),
            identity_url: self.identity_url.clone(),
        }
    }
}
