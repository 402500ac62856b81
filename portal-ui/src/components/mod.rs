//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod chart;
pub mod demo_badge;
pub mod guard;
pub mod loading;
pub mod nav;
pub mod summary_card;

pub use chart::{StatusPieChart, UserBarChart};
pub use demo_badge::DemoBadge;
pub use guard::{Fallback, Guarded};
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use summary_card::SummaryCard;
