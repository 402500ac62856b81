//! Authentication
//!
//! Credential checking behind the [`Authenticator`] trait. The session
//! manager never knows which mode it runs in; [`build_authenticator`] picks
//! the implementation once from configuration.
//!
//! - **demo**: local check against the fixed demo identity
//! - **live**: single POST to the remote login endpoint
//! - **validation**: login form checks run before any authenticator

mod demo;
mod live;
pub mod validation;

pub use demo::{Delay, DemoAuthenticator, NoDelay, DEMO_EMAIL, DEMO_PASSWORD};
pub use live::{LiveAuthenticator, LoginResponse};
pub use validation::{validate_login_form, ValidationError};

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AuthConfig, AuthMode};

/// Email and password as submitted by the login form
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a login attempt failed.
///
/// `Display` is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Invalid demo credentials")]
    InvalidDemoCredentials,

    /// HTTP 400
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// HTTP 401
    #[error("Unauthorized. Please check your credentials.")]
    Unauthorized,

    /// HTTP 429
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// HTTP 5xx
    #[error("Server error. Please try again later.")]
    Server,

    #[error("Login failed ({0})")]
    UnexpectedStatus(u16),

    /// Success status but the body carried an `error` instead of a token
    #[error("{0}")]
    Rejected(String),

    #[error("Login failed - no token received")]
    MissingToken,

    /// Host unreachable or the request could not be sent
    #[error("Network error. Please check your internet connection.")]
    Network,

    #[error("Request timeout. Please try again.")]
    Timeout,

    /// Any other transport or decoding failure
    #[error("Network error. Please try again.")]
    Unexpected,

    #[error("A login attempt is already in progress")]
    InProgress,

    #[error("Unable to save your session. Please try again.")]
    Storage,

    /// Logout ran while the attempt was waiting on the authenticator
    #[error("Login cancelled by sign-out. Please try again.")]
    Superseded,
}

/// Outcome of a login: `Ok(())` on success, otherwise the user-facing error
pub type LoginResult = Result<(), LoginError>;

/// Checks credentials and issues a session token.
#[async_trait(?Send)]
pub trait Authenticator {
    fn mode(&self) -> AuthMode;

    /// Returns the token for a successful login
    async fn authenticate(&self, credentials: &Credentials) -> Result<String, LoginError>;
}

/// Build the authenticator selected by `config.mode`.
///
/// `delay` is only used in demo mode; the caller provides one that suits the
/// host (a browser timer, a runtime sleep, or [`NoDelay`]).
pub fn build_authenticator(
    config: &AuthConfig,
    delay: Rc<dyn Delay>,
) -> Result<Box<dyn Authenticator>, reqwest::Error> {
    let authenticator: Box<dyn Authenticator> = match config.mode {
        AuthMode::Demo => Box::new(DemoAuthenticator::new(delay, config.demo_delay())),
        AuthMode::Live => Box::new(LiveAuthenticator::new(&config.login_url)?),
    };

    tracing::info!(mode = %config.mode, "Authenticator ready");
    Ok(authenticator)
}
