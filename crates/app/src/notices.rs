//! User-visible notices.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use wavecart::{
    cart::{AddOutcome, CartError},
    checkout::CheckoutError,
};

use crate::{auth::AuthError, catalog::CatalogError};

/// How long a notice stays visible when no lifetime is configured.
pub const DEFAULT_NOTICE_TTL: SignedDuration = SignedDuration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl From<&CatalogError> for Notice {
    fn from(error: &CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::error("Product not found."),
            CatalogError::InvalidUrl(_) => Self::error(error.to_string()),
            CatalogError::Http(_) | CatalogError::UnexpectedStatus { .. } => {
                Self::error("Could not reach the catalog. Please try again.")
            }
        }
    }
}

impl From<&AuthError> for Notice {
    fn from(error: &AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => Self::error("Invalid email or password."),
            AuthError::EmailInUse => Self::error("This email is already registered."),
            AuthError::WeakPassword => Self::error("Password should be at least 6 characters."),
            AuthError::NotConfigured | AuthError::Http(_) | AuthError::UnexpectedResponse(_) => {
                Self::error(format!("Authentication failed: {error}"))
            }
        }
    }
}

impl From<&CartError> for Notice {
    fn from(error: &CartError) -> Self {
        match error {
            CartError::StockExceeded { .. } => Self::error("Cannot add more than available stock!"),
            CartError::ZeroQuantity => Self::warning("Quantity must be at least 1."),
        }
    }
}

impl From<&CheckoutError> for Notice {
    fn from(error: &CheckoutError) -> Self {
        match error {
            CheckoutError::NotLoggedIn => {
                Self::error("You are not logged in! Please Log in to use the cart")
            }
            CheckoutError::EmptyCart => Self::error("Your cart is empty!"),
        }
    }
}

impl From<&AddOutcome> for Notice {
    fn from(outcome: &AddOutcome) -> Self {
        if outcome.is_clamped() {
            Self::warning(format!(
                "Only {} of {} added, the rest is out of stock.",
                outcome.accepted, outcome.requested
            ))
        } else {
            Self::success("Added to cart.")
        }
    }
}

/// Notices waiting to be shown. Each one expires after the configured TTL.
#[derive(Debug, Clone)]
pub struct Notices {
    ttl: SignedDuration,
    entries: Vec<(Notice, Timestamp)>,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl Notices {
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            ttl,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, notice: impl Into<Notice>) {
        self.push_at(notice, Timestamp::now());
    }

    pub fn push_at(&mut self, notice: impl Into<Notice>, now: Timestamp) {
        let expires_at = now.checked_add(self.ttl).unwrap_or(Timestamp::MAX);

        self.entries.push((notice.into(), expires_at));
    }

    /// Drop expired notices and return what is left.
    pub fn active(&mut self) -> Vec<Notice> {
        self.active_at(Timestamp::now())
    }

    pub fn active_at(&mut self, now: Timestamp) -> Vec<Notice> {
        self.entries.retain(|(_, expires_at)| *expires_at > now);

        self.entries.iter().map(|(notice, _)| notice.clone()).collect()
    }

    /// Remove and return every pending notice regardless of age.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.entries.drain(..).map(|(notice, _)| notice).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use wavecart::products::ProductId;

    use super::*;

    #[test]
    fn notices_expire_after_ttl() -> TestResult {
        let mut notices = Notices::new(SignedDuration::from_secs(3));
        let start: Timestamp = "2026-03-01T12:00:00Z".parse()?;

        notices.push_at(&AuthError::InvalidCredentials, start);

        assert_eq!(
            notices.active_at(start.checked_add(SignedDuration::from_millis(2_999))?),
            vec![Notice::error("Invalid email or password.")]
        );
        assert!(
            notices
                .active_at(start.checked_add(SignedDuration::from_secs(3))?)
                .is_empty()
        );
        assert!(notices.is_empty());

        Ok(())
    }

    #[test]
    fn stock_exceeded_message() {
        let notice = Notice::from(&CartError::StockExceeded {
            id: ProductId(1),
            stock: 3,
        });

        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Cannot add more than available stock!");
    }

    #[test]
    fn clamped_add_is_a_warning() {
        let notice = Notice::from(&AddOutcome {
            requested: 5,
            accepted: 1,
            quantity: 3,
        });

        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "Only 1 of 5 added, the rest is out of stock.");
    }

    #[test]
    fn network_failures_share_one_message() {
        let notice = Notice::from(&CatalogError::UnexpectedStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: String::new(),
        });

        assert_eq!(notice.to_string(), "[error] Could not reach the catalog. Please try again.");
    }

    #[test]
    fn drain_empties_queue() {
        let mut notices = Notices::default();

        notices.push(&CheckoutError::EmptyCart);
        notices.push(Notice::success("Order placed successfully!"));

        assert_eq!(notices.drain().len(), 2);
        assert!(notices.is_empty());
    }
}
