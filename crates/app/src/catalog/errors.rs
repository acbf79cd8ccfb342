//! Catalog errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found")]
    NotFound,

    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    #[error("catalog responded with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    /// Whether the failure is transient and worth showing as a network notice.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UnexpectedStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_a_network_failure() {
        assert!(!CatalogError::NotFound.is_network_failure());
        assert!(!CatalogError::InvalidUrl("nope".to_string()).is_network_failure());
    }

    #[test]
    fn unexpected_status_is_a_network_failure() {
        let error = CatalogError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };

        assert!(error.is_network_failure());
        assert_eq!(
            error.to_string(),
            "catalog responded with status 502 Bad Gateway: "
        );
    }
}
