//! Firebase Identity Toolkit client for email/password accounts.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::sync::watch;
use tracing::{debug, info, instrument};
use wavecart::session::Identity;
use zeroize::Zeroizing;

use crate::auth::{AuthError, Credentials, SignUp};

/// Identity Toolkit base URL used when none is configured.
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Configuration for the identity provider.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key. Without one every call fails with
    /// [`AuthError::NotConfigured`].
    pub api_key: Option<String>,

    /// Identity Toolkit base URL, e.g. `"https://identitytoolkit.googleapis.com/v1"`.
    pub identity_url: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
        }
    }
}

/// Email/password auth against Identity Toolkit.
///
/// Identity changes are published on a watch channel so the session can
/// follow sign-ins and sign-outs made anywhere in the process.
#[derive(Debug)]
pub struct FirebaseAuthClient {
    config: FirebaseConfig,
    http: Client,
    identity: watch::Sender<Option<Identity>>,
}

impl FirebaseAuthClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        let (identity, _) = watch::channel(None);

        Self {
            config,
            http: Client::new(),
            identity,
        }
    }

    /// Sign in with an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on a wrong email or password.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let account: AccountResponse = self
            .post(
                "accounts:signInWithPassword",
                &PasswordRequest::new(credentials),
            )
            .await?;

        let identity = account.into_identity();

        info!(uid = %identity.uid, "signed in");

        self.identity.send_replace(Some(identity.clone()));

        Ok(identity)
    }

    /// Register a new account and set its display name.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailInUse`] or [`AuthError::WeakPassword`] when
    /// the provider rejects the account.
    #[instrument(skip(self, sign_up), fields(email = %sign_up.credentials.email))]
    pub async fn sign_up(&self, sign_up: &SignUp) -> Result<Identity, AuthError> {
        let mut account: AccountResponse = self
            .post("accounts:signUp", &PasswordRequest::new(&sign_up.credentials))
            .await?;

        let id_token = account.take_id_token();

        let _profile: ProfileResponse = self
            .post(
                "accounts:update",
                &ProfileUpdate {
                    id_token: &id_token,
                    display_name: &sign_up.display_name,
                    return_secure_token: false,
                },
            )
            .await?;

        let mut identity = account.into_identity();
        identity.display_name = Some(sign_up.display_name.clone());

        info!(uid = %identity.uid, "signed up");

        self.identity.send_replace(Some(identity.clone()));

        Ok(identity)
    }

    /// Forget the current identity.
    pub fn sign_out(&self) {
        if self.identity.send_replace(None).is_some() {
            info!("signed out");
        }
    }

    /// Watch identity changes. The receiver starts with the current identity.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    async fn post<B, T>(&self, method: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let api_key = self.config.api_key.as_deref().ok_or(AuthError::NotConfigured)?;
        let url = format!("{}/{method}", self.config.identity_url.trim_end_matches('/'));

        debug!(%method, "identity request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await?;

        read_account(response).await
    }
}

async fn read_account<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();

        return Err(match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(parsed) => AuthError::from_code(&parsed.error.message),
            Err(_) => AuthError::UnexpectedResponse(format!(
                "request failed with status {status}: {text}"
            )),
        });
    }

    Ok(response.json().await?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

impl<'a> PasswordRequest<'a> {
    fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUpdate<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: String,
}

impl AccountResponse {
    /// Move the ID token out, leaving an empty string behind.
    fn take_id_token(&mut self) -> Zeroizing<String> {
        Zeroizing::new(std::mem::take(&mut self.id_token))
    }

    fn into_identity(self) -> Identity {
        Identity {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.filter(|name| !name.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn account_response_becomes_identity() -> TestResult {
        let account: AccountResponse = serde_json::from_str(
            r#"{"localId": "u1", "email": "ada@example.com", "displayName": "", "idToken": "t"}"#,
        )?;

        assert_eq!(
            account.into_identity(),
            Identity {
                uid: "u1".to_string(),
                email: "ada@example.com".to_string(),
                display_name: None,
            }
        );

        Ok(())
    }

    #[test]
    fn id_token_is_moved_out_of_account() -> TestResult {
        let mut account: AccountResponse = serde_json::from_str(
            r#"{"localId": "u1", "email": "ada@example.com", "idToken": "secret-token"}"#,
        )?;

        let id_token = account.take_id_token();

        assert_eq!(id_token.as_str(), "secret-token");
        assert!(account.id_token.is_empty());

        Ok(())
    }

    #[test]
    fn provider_error_body_parses() -> TestResult {
        let parsed: ErrorResponse = serde_json::from_str(
            r#"{"error": {"code": 400, "message": "EMAIL_EXISTS", "errors": []}}"#,
        )?;

        assert!(matches!(
            AuthError::from_code(&parsed.error.message),
            AuthError::EmailInUse
        ));

        Ok(())
    }

    #[test]
    fn password_request_uses_camel_case() -> TestResult {
        let credentials = Credentials::new("ada@example.com", "secret1");
        let body = serde_json::to_value(PasswordRequest::new(&credentials))?;

        assert_eq!(
            body,
            serde_json::json!({
                "email": "ada@example.com",
                "password": "secret1",
                "returnSecureToken": true,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn sign_in_without_api_key_is_not_configured() {
        let client = FirebaseAuthClient::new(FirebaseConfig::default());

        let result = client
            .sign_in(&Credentials::new("ada@example.com", "secret1"))
            .await;

        assert!(matches!(result, Err(AuthError::NotConfigured)));
        assert!(client.subscribe().borrow().is_none());
    }

    #[test]
    fn sign_out_publishes_none() {
        let client = FirebaseAuthClient::new(FirebaseConfig::default());
        let receiver = client.subscribe();

        client.identity.send_replace(Some(Identity {
            uid: "u1".to_string(),
            email: "ada@example.com".to_string(),
            display_name: None,
        }));
        assert!(receiver.borrow().is_some());

        client.sign_out();

        assert!(receiver.borrow().is_none());
    }
}
