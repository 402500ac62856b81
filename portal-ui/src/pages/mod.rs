//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod dashboard;
pub mod login;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use login::Login;
