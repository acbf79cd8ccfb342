//! Application configuration

use clap::Parser;

use crate::config::{
    auth::AuthConfig, catalog::CatalogArgs, observability::LoggingConfig,
    storefront::StorefrontConfig,
};

pub mod auth;
pub mod catalog;
pub mod observability;
pub mod storefront;

pub use observability::LogFormat;

/// Wavecart storefront configuration
#[derive(Debug, Parser)]
#[command(name = "wavecart", about = "Wavecart storefront", long_about = None)]
pub struct AppConfig {
    /// Product catalog settings.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Identity provider settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Search and notice timing.
    #[command(flatten)]
    pub storefront: StorefrontConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_storefront() -> TestResult {
        let config = AppConfig::try_parse_from(["wavecart"])?;

        assert_eq!(config.catalog.catalog_url, "https://dummyjson.com/products");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.storefront.search_debounce(), Duration::from_millis(1000));
        assert_eq!(config.storefront.notice_ttl_seconds, 3);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = AppConfig::try_parse_from([
            "wavecart",
            "--page-size",
            "24",
            "--search-debounce-ms",
            "250",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.catalog.page_size, 24);
        assert_eq!(config.storefront.search_debounce(), Duration::from_millis(250));
        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(AppConfig::try_parse_from(["wavecart", "--page-size", "0"]).is_err());
    }
}
