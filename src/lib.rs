//! # Analytics Portal
//!
//! Core of a small single-page analytics application: a token session that
//! survives reloads, a demo/live login switch, route protection, and the
//! aggregation behind the analytics charts.
//!
//! The crate is platform-neutral. Browser specifics (localStorage, fetch,
//! timers, console output) are supplied by the `portal-ui` frontend through
//! the traits defined here.
//!
//! ## Modules
//!
//! - [`session`]: persistent session store and the session state machine
//! - [`auth`]: demo and live authenticators, login form validation
//! - [`routing`]: route guard
//! - [`analytics`]: todo aggregation for the charts
//! - [`config`]: TOML configuration with overrides
//! - [`logging`]: tracing subscriber bootstrap
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use analytics_portal::auth::{build_authenticator, NoDelay};
//! use analytics_portal::session::{MemoryStore, SessionManager, SessionStore};
//! use analytics_portal::Config;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let authenticator = build_authenticator(&config.auth, Rc::new(NoDelay))?;
//! let manager = SessionManager::new(
//!     SessionStore::new(Rc::new(MemoryStore::new())),
//!     authenticator,
//! );
//!
//! manager.rehydrate();
//! if let Err(e) = manager.login("eve.holt@reqres.in", "cityslicka").await {
//!     println!("{}", e);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod auth;
pub mod config;
pub mod logging;
pub mod routing;
pub mod session;

pub use analytics::{
    load_stats, AnalyticsError, StatusSlice, TodoRecord, TodoSource, TodoStats, UserTotals,
};

pub use auth::{
    build_authenticator, validate_login_form, Authenticator, Credentials, Delay,
    DemoAuthenticator, LiveAuthenticator, LoginError, LoginResult, NoDelay, ValidationError,
};

pub use config::{AnalyticsConfig, AuthConfig, AuthMode, Config, ConfigError, LoggingConfig};

pub use logging::LoggingError;

pub use routing::{resolve, show_navigation, Destination, RouteDecision};

pub use session::{
    AuthStatus, KeyValueStore, MemoryStore, Session, SessionManager, SessionState, SessionStore,
    StoreError, StoredSession, UserProfile,
};
