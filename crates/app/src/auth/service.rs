//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::watch;
use wavecart::session::Identity;

use crate::auth::{AuthError, Credentials, FirebaseAuthClient, SignUp};

#[async_trait]
impl AuthService for FirebaseAuthClient {
    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        FirebaseAuthClient::sign_in(self, &credentials).await
    }

    async fn sign_up(&self, sign_up: SignUp) -> Result<Identity, AuthError> {
        FirebaseAuthClient::sign_up(self, &sign_up).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        FirebaseAuthClient::sign_out(self);

        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        FirebaseAuthClient::subscribe(self)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError>;

    /// Register an account with a display name.
    async fn sign_up(&self, sign_up: SignUp) -> Result<Identity, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Identity changes, starting from the current identity.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}
