//! Auth models.

use std::fmt;

use zeroize::Zeroizing;

/// Email and password for signing in.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New account details.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub credentials: Credentials,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let sign_up = SignUp {
            credentials: Credentials::new("ada@example.com", "hunter22"),
            display_name: "Ada".to_string(),
        };

        let output = format!("{sign_up:?}");

        assert!(output.contains("ada@example.com"), "{output}");
        assert!(!output.contains("hunter22"), "{output}");
    }
}
