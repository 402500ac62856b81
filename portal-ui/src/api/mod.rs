//! HTTP API
//!
//! Browser-side data sources for the core crate.

pub mod client;

pub use client::TodoClient;
