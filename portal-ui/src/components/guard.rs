//! Route Guard Component
//!
//! Applies the core route guard to a route's view.

use analytics_portal::routing::{resolve, Destination, RouteDecision};
use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Render `children` only when the guard allows `destination`.
///
/// Re-evaluated whenever the session status changes. While the session is
/// still initializing nothing is rendered and nothing redirects.
#[component]
pub fn Guarded(
    destination: Destination,
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let session = use_session();

    move || match resolve(session.status.get(), destination) {
        RouteDecision::Defer => view! {}.into_view(),
        RouteDecision::Redirect(target) => view! {
            <Redirect
                path=target.path()
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_view(),
        RouteDecision::Render(_) => children
            .as_ref()
            .map(|children| children().into_view())
            .unwrap_or_else(|| view! {}.into_view()),
    }
}

/// Catch-all route.
///
/// Paths that name a known destination in a non-canonical form (trailing
/// slash) are sent to the canonical path; everything else is guarded as
/// [`Destination::Root`].
#[component]
pub fn Fallback() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();

    match Destination::from_path(&pathname) {
        Destination::Root => view! { <Guarded destination=Destination::Root /> }.into_view(),
        known => view! {
            <Redirect
                path=known.path()
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_view(),
    }
}
