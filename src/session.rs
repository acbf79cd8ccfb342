//! Session

use serde::{Deserialize, Serialize};

use crate::listeners::{ListenerKey, Listeners};

/// Authenticated user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Provider user id
    pub uid: String,

    /// Account email
    pub email: String,

    /// Display name, if set
    pub display_name: Option<String>,
}

/// Current authenticated identity, at most one at a time.
#[derive(Debug, Default)]
pub struct SessionStore {
    identity: Option<Identity>,
    listeners: Listeners<SessionStore>,
}

impl SessionStore {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current identity.
    pub fn sign_in(&mut self, identity: Identity) {
        if self.identity.as_ref() == Some(&identity) {
            return;
        }

        self.identity = Some(identity);
        self.listeners.notify(self);
    }

    /// Drop the current identity.
    pub fn sign_out(&mut self) {
        if self.identity.take().is_some() {
            self.listeners.notify(self);
        }
    }

    /// Apply an identity change notification from the auth provider.
    pub fn apply(&mut self, identity: Option<Identity>) {
        match identity {
            Some(identity) => self.sign_in(identity),
            None => self.sign_out(),
        }
    }

    /// Current identity
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether a user is signed in
    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Register a listener called after every identity change.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&SessionStore) + Send + Sync + 'static,
    ) -> ListenerKey {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }
}
