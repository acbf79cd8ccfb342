//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already registered")]
    EmailInUse,

    #[error("password is too weak")]
    WeakPassword,

    #[error("authentication is not configured")]
    NotConfigured,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}

impl AuthError {
    /// Map an identity provider error code, e.g. `"EMAIL_EXISTS"` or
    /// `"WEAK_PASSWORD : Password should be at least 6 characters"`.
    pub fn from_code(code: &str) -> Self {
        let head = code.split_whitespace().next().unwrap_or_default();

        match head {
            "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "INVALID_LOGIN_CREDENTIALS" => {
                Self::InvalidCredentials
            }
            "EMAIL_EXISTS" => Self::EmailInUse,
            weak if weak.starts_with("WEAK_PASSWORD") => Self::WeakPassword,
            _ => Self::UnexpectedResponse(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_codes_map_to_invalid_credentials() {
        for code in ["INVALID_PASSWORD", "EMAIL_NOT_FOUND", "INVALID_LOGIN_CREDENTIALS"] {
            assert!(
                matches!(AuthError::from_code(code), AuthError::InvalidCredentials),
                "{code} should be invalid credentials"
            );
        }
    }

    #[test]
    fn weak_password_code_with_detail() {
        let error = AuthError::from_code("WEAK_PASSWORD : Password should be at least 6 characters");

        assert!(matches!(error, AuthError::WeakPassword));
    }

    #[test]
    fn email_exists_maps_to_email_in_use() {
        assert!(matches!(AuthError::from_code("EMAIL_EXISTS"), AuthError::EmailInUse));
    }

    #[test]
    fn unknown_code_is_kept() {
        let error = AuthError::from_code("TOO_MANY_ATTEMPTS_TRY_LATER");

        assert_eq!(
            error.to_string(),
            "unexpected response from identity provider: TOO_MANY_ATTEMPTS_TRY_LATER"
        );
    }
}
