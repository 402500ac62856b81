//! Session Manager
//!
//! Owns the in-memory authentication state. Mode-agnostic: credential checks
//! are delegated to the [`Authenticator`] it was built with.

use std::cell::{Cell, RefCell};

use super::store::SessionStore;
use super::{AuthStatus, Session, SessionState, UserProfile};
use crate::auth::{Authenticator, Credentials, LoginError, LoginResult};
use crate::config::AuthMode;

/// Authentication state machine.
///
/// `Initializing` is left exactly once, by [`SessionManager::rehydrate`].
/// Afterwards only [`login`](SessionManager::login) enters `Authenticated`
/// and only [`logout`](SessionManager::logout) leaves it.
pub struct SessionManager {
    store: SessionStore,
    authenticator: Box<dyn Authenticator>,
    state: RefCell<SessionState>,
    login_pending: Cell<bool>,
    /// Bumped by every logout; a login that sees it change is discarded
    epoch: Cell<u64>,
}

/// Clears the pending flag when a login finishes or its future is dropped
struct PendingGuard<'a>(&'a Cell<bool>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SessionManager {
    pub fn new(store: SessionStore, authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            store,
            authenticator,
            state: RefCell::new(SessionState::Initializing),
            login_pending: Cell::new(false),
            epoch: Cell::new(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> AuthStatus {
        self.state.borrow().status()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.borrow().user().cloned()
    }

    pub fn mode(&self) -> AuthMode {
        self.authenticator.mode()
    }

    pub fn is_login_pending(&self) -> bool {
        self.login_pending.get()
    }

    /// Rebuild the session from storage.
    ///
    /// Only the first call reads the store; later calls return the current
    /// status unchanged.
    pub fn rehydrate(&self) -> AuthStatus {
        if !self.status().is_initializing() {
            return self.status();
        }

        let next = match self.store.load() {
            Some(stored) => {
                tracing::info!(email = %stored.user.email, "Session rehydrated");
                SessionState::Authenticated(Session {
                    token: stored.token,
                    user: stored.user,
                })
            }
            None => {
                tracing::debug!("No stored session");
                SessionState::Unauthenticated
            }
        };

        *self.state.borrow_mut() = next;
        self.status()
    }

    /// Attempt to sign in.
    ///
    /// Never panics: every failure comes back as a [`LoginError`] whose
    /// message can be shown to the user as-is. A call made while another is
    /// still pending is rejected with [`LoginError::InProgress`]. If
    /// [`logout`](SessionManager::logout) runs before the authenticator
    /// answers, the result is dropped with [`LoginError::Superseded`].
    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        if self.login_pending.get() {
            tracing::debug!("Rejecting overlapping login attempt");
            return Err(LoginError::InProgress);
        }
        self.login_pending.set(true);
        let _pending = PendingGuard(&self.login_pending);

        self.rehydrate();
        let epoch = self.epoch.get();

        let credentials = Credentials::new(email, password);
        let token = match self.authenticator.authenticate(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(mode = %self.mode(), error = %e, "Login failed");
                return Err(e);
            }
        };

        if self.epoch.get() != epoch {
            tracing::info!(mode = %self.mode(), "Discarding login overtaken by logout");
            return Err(LoginError::Superseded);
        }

        let user = UserProfile::new(email);
        if let Err(e) = self.store.save(&token, &user) {
            tracing::error!(error = %e, "Failed to persist session");
            return Err(LoginError::Storage);
        }

        tracing::info!(mode = %self.mode(), email = %user.email, "Login succeeded");
        *self.state.borrow_mut() = SessionState::Authenticated(Session { token, user });
        Ok(())
    }

    /// Drop the session from memory and storage. Idempotent.
    pub fn logout(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
        self.store.clear();
        let was_authenticated = self.status().is_authenticated();
        *self.state.borrow_mut() = SessionState::Unauthenticated;

        if was_authenticated {
            tracing::info!("Logged out");
        }
    }
}
