//! Storefront timing Config

use std::time::Duration;

use clap::Args;

/// Search and notice timing.
#[derive(Debug, Args)]
pub struct StorefrontConfig {
    /// Quiet period before a search query is sent, in milliseconds
    #[arg(long, env = "SEARCH_DEBOUNCE_MS", default_value_t = 1_000_u64)]
    pub search_debounce_ms: u64,

    /// Lifetime of auth notices in seconds
    #[arg(long, env = "NOTICE_TTL_SECONDS", default_value_t = 3_u64)]
    pub notice_ttl_seconds: u64,
}

impl StorefrontConfig {
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
