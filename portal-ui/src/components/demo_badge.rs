//! Demo Badge Component

use leptos::*;

/// Badge marking the portal as running against the offline authenticator
#[component]
pub fn DemoBadge() -> impl IntoView {
    view! {
        <span class="inline-flex items-center px-3 py-1 rounded-full text-xs font-semibold
                     bg-yellow-100 text-yellow-800 border border-yellow-300">
            "Demo Mode Active"
        </span>
    }
}
