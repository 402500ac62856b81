//! Analytics Portal Frontend
//!
//! Single-page dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Token session persisted in localStorage, restored on reload
//! - Demo or live login, fixed at build time
//! - Protected dashboard and analytics routes
//! - Canvas charts of todo completion and per-user totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Session, routing and aggregation logic live in the
//! `analytics-portal` core crate; this crate provides the browser adapters
//! and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::load();
    if let Err(e) = analytics_portal::logging::init(&config.logging, logging::ConsoleWriter) {
        web_sys::console::warn_1(&format!("Logging disabled: {}", e).into());
    }

    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
