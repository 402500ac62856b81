//! Session Context
//!
//! Wraps the core [`SessionManager`] and mirrors its state into Leptos
//! signals. Constructed once at the app root and provided through context.

use std::rc::Rc;
use std::time::Duration;

use analytics_portal::auth::{build_authenticator, Delay};
use analytics_portal::config::{AuthConfig, AuthMode};
use analytics_portal::session::{AuthStatus, SessionManager, SessionStore, UserProfile};
use analytics_portal::{LoginError, LoginResult};
use async_trait::async_trait;
use leptos::*;

use super::storage::LocalStorageStore;

/// [`Delay`] backed by a browser timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Session state shared with every component
#[derive(Clone)]
pub struct SessionContext {
    manager: Option<Rc<SessionManager>>,
    /// Current authentication status
    pub status: RwSignal<AuthStatus>,
    /// Signed-in user, if any
    pub user: RwSignal<Option<UserProfile>>,
    /// Authentication mode the bundle was built with
    pub mode: AuthMode,
}

impl SessionContext {
    fn new(config: &AuthConfig) -> Self {
        let store = SessionStore::new(Rc::new(LocalStorageStore::new()));
        let delay: Rc<dyn Delay> = Rc::new(TimerDelay);

        let manager = match build_authenticator(config, delay) {
            Ok(authenticator) => Some(Rc::new(SessionManager::new(store, authenticator))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to build authenticator");
                None
            }
        };

        Self {
            manager,
            status: create_rw_signal(AuthStatus::Initializing),
            user: create_rw_signal(None),
            mode: config.mode,
        }
    }

    /// Copy the manager's state into the signals
    fn sync(&self) {
        match &self.manager {
            Some(manager) => {
                self.user.set(manager.user());
                self.status.set(manager.status());
            }
            None => {
                self.user.set(None);
                self.status.set(AuthStatus::Unauthenticated);
            }
        }
    }

    /// Leave `Initializing` by reading the stored session
    pub fn rehydrate(&self) {
        if let Some(manager) = &self.manager {
            manager.rehydrate();
        }
        self.sync();
    }

    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        let result = match &self.manager {
            Some(manager) => manager.login(email, password).await,
            None => Err(LoginError::Unexpected),
        };
        self.sync();
        result
    }

    pub fn logout(&self) {
        if let Some(manager) = &self.manager {
            manager.logout();
        } else {
            // Keep storage consistent even without an authenticator
            SessionStore::new(Rc::new(LocalStorageStore::new())).clear();
        }
        self.sync();
    }

    pub fn is_demo(&self) -> bool {
        self.mode.is_demo()
    }
}

/// Build the session context, rehydrate it, and provide it to the tree
pub fn provide_session_context(config: &AuthConfig) {
    let context = SessionContext::new(config);
    provide_context(context.clone());
    context.rehydrate();
}

/// Fetch the session context provided at the app root
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}
