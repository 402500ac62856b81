//! Navigation Component
//!
//! Header navigation bar with brand, page links and logout.

use analytics_portal::routing::Destination;
use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();
    let on_logout = move |_| session.logout();

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href=Destination::DEFAULT_AUTHENTICATED.path() class="flex items-center space-x-3">
                        <span class="text-2xl">"📊"</span>
                        <span class="text-xl font-bold text-gray-800">"Analytics Portal"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {Destination::NAVIGABLE
                            .into_iter()
                            .map(|dest| view! { <NavLink href=dest.path() label=dest.title() /> })
                            .collect_view()}

                        <button
                            on:click=on_logout
                            class="ml-2 px-4 py-2 rounded-lg text-sm font-medium text-white
                                   bg-gray-500 hover:bg-gray-600 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-blue-50 text-blue-700"
        >
            {label}
        </A>
    }
}
