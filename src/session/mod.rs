//! Session Management
//!
//! - **store**: persistence of the token and user identity
//! - **manager**: the authentication state machine
//!
//! ```text
//! Initializing ──rehydrate──▶ Authenticated ◀──login── Unauthenticated
//!                    └──────▶ Unauthenticated ◀──logout── Authenticated
//! ```

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{KeyValueStore, MemoryStore, SessionStore, StoreError, StoredSession};

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, persisted as `{"email": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Name used for greetings: the local part of the email, or `User`
    pub fn display_name(&self) -> &str {
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "User",
        }
    }
}

/// An authenticated session held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Full authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Storage has not been consulted yet
    #[default]
    Initializing,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn status(&self) -> AuthStatus {
        match self {
            SessionState::Initializing => AuthStatus::Initializing,
            SessionState::Authenticated(_) => AuthStatus::Authenticated,
            SessionState::Unauthenticated => AuthStatus::Unauthenticated,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session().map(|s| &s.user)
    }
}

/// Copyable projection of [`SessionState`] used by routing and views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Initializing,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, AuthStatus::Initializing)
    }
}
