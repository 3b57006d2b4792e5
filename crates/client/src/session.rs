//! Session and authentication state.
//!
//! Holds the current authenticated user, derived from a bearer token
//! persisted in the local store. The token is the durable record; the user
//! is a cache resolved from it. Invariant: a present token implies a
//! resolution attempt was made - if resolution fails the token is removed,
//! never left dangling.
//!
//! Login and register failures are deliberately flattened to generic
//! errors before they reach presentation; the underlying API error is
//! logged at debug level so diagnostic detail is kept without being shown
//! to the user.

use thiserror::Error;
use tracing::debug;

use shopfront_core::User;

use crate::api::ApiClient;
use crate::store::{LocalStore, StoreError, keys};

/// Errors surfaced from session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password. Intentionally carries no detail; the cause
    /// is logged internally.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Registration rejected (most commonly a duplicate email).
    /// Intentionally carries no detail; the cause is logged internally.
    #[error("registration failed; the email may already be in use")]
    RegistrationFailed,

    /// Reading or writing the persisted token failed.
    #[error("local store error: {0}")]
    Store(#[from] StoreError),
}

/// Authentication state of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No token, no user.
    Anonymous,
    /// A stored token exists and profile resolution is in flight.
    Resolving,
    /// Token resolved to an account.
    Authenticated(User),
}

/// Client session: the record of whether, and as whom, the user is
/// authenticated.
#[derive(Debug)]
pub struct Session {
    store: LocalStore,
    state: AuthState,
}

impl Session {
    /// Create an anonymous session backed by `store`.
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self {
            store,
            state: AuthState::Anonymous,
        }
    }

    /// Current authentication state.
    #[must_use]
    pub const fn state(&self) -> &AuthState {
        &self.state
    }

    /// The authenticated user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Anonymous | AuthState::Resolving => None,
        }
    }

    /// Whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    /// Resolve a stored token to a user at startup.
    ///
    /// No stored token leaves the session anonymous. A token that fails to
    /// resolve is removed from the store and the session collapses back to
    /// anonymous; the failure is logged, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` only for local store failures.
    pub async fn resolve(&mut self, api: &ApiClient) -> Result<(), AuthError> {
        let token: Option<String> = self.store.get(keys::AUTH_TOKEN)?;
        if token.is_none() {
            self.state = AuthState::Anonymous;
            return Ok(());
        }

        self.state = AuthState::Resolving;
        match api.profile().await {
            Ok(user) => {
                debug!(user = %user.id, "stored token resolved");
                self.state = AuthState::Authenticated(user);
            }
            Err(e) => {
                // Stale or invalid token: discard silently.
                debug!(error = %e, "stored token failed to resolve; discarding");
                self.store.remove(keys::AUTH_TOKEN)?;
                self.state = AuthState::Anonymous;
            }
        }
        Ok(())
    }

    /// Log in with email and password.
    ///
    /// On success the token is persisted and the session becomes
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for any API failure (the
    /// underlying error is logged at debug level), or `AuthError::Store`
    /// if the token cannot be persisted.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        let payload = api.login(email, password).await.map_err(|e| {
            debug!(error = %e, "login failed");
            AuthError::InvalidCredentials
        })?;

        self.store.put(keys::AUTH_TOKEN, &payload.token)?;
        self.state = AuthState::Authenticated(payload.user);
        self.user().ok_or(AuthError::InvalidCredentials)
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RegistrationFailed` for any API failure (the
    /// underlying error is logged at debug level), or `AuthError::Store`
    /// if the token cannot be persisted.
    pub async fn register(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<&User, AuthError> {
        let payload = api.register(email, password, name).await.map_err(|e| {
            debug!(error = %e, "registration failed");
            AuthError::RegistrationFailed
        })?;

        self.store.put(keys::AUTH_TOKEN, &payload.token)?;
        self.state = AuthState::Authenticated(payload.user);
        self.user().ok_or(AuthError::RegistrationFailed)
    }

    /// Log out: remove the stored token and forget the user.
    ///
    /// Synchronous and unconditional; safe to call while anonymous. The
    /// orchestration shell also clears the cart on logout.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the token record cannot be removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.remove(keys::AUTH_TOKEN)?;
        self.state = AuthState::Anonymous;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let (_dir, store) = store();
        let session = Session::new(store);
        assert_eq!(*session.state(), AuthState::Anonymous);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_logout_is_unconditional() {
        let (_dir, store) = store();
        store.put(keys::AUTH_TOKEN, &"tok".to_string()).unwrap();

        let mut session = Session::new(store.clone());
        session.logout().unwrap();
        session.logout().unwrap();

        assert!(!store.contains(keys::AUTH_TOKEN));
        assert_eq!(*session.state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_resolve_without_token_stays_anonymous() {
        let (_dir, store) = store();
        let api = ApiClient::new(
            &"http://127.0.0.1:9/api".parse().unwrap(),
            store.clone(),
        );

        let mut session = Session::new(store);
        session.resolve(&api).await.unwrap();
        assert_eq!(*session.state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_resolve_unreachable_backend_discards_token() {
        let (_dir, store) = store();
        store.put(keys::AUTH_TOKEN, &"stale".to_string()).unwrap();

        // Port 9 (discard) is never listening; the profile fetch fails and
        // the token must be removed.
        let api = ApiClient::new(
            &"http://127.0.0.1:9/api".parse().unwrap(),
            store.clone(),
        );

        let mut session = Session::new(store.clone());
        session.resolve(&api).await.unwrap();

        assert_eq!(*session.state(), AuthState::Anonymous);
        assert!(!store.contains(keys::AUTH_TOKEN));
    }
}
