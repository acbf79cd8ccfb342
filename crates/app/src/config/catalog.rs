//! Catalog Config

use std::time::Duration;

use clap::Args;

use crate::catalog::{CatalogConfig, DEFAULT_CATALOG_URL};

/// Product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Products collection URL
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Products per listing page
    #[arg(
        long,
        env = "PAGE_SIZE",
        default_value_t = wavecart::pagination::DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page_size: u32,

    /// Catalog request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub request_timeout_seconds: u64,
}

impl CatalogArgs {
    #[must_use]
    pub fn client_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_seconds),
        }
    }
}
