//! Dashboard Page
//!
//! Landing page after sign-in.

use analytics_portal::routing::Destination;
use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let user = session.user;
    let on_logout = move |_| session.logout();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="bg-white rounded-xl shadow-sm p-8">
                <h1 class="text-3xl font-bold">
                    {move || {
                        let name = user
                            .get()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_else(|| "User".to_string());
                        format!("Welcome, {}!", name)
                    }}
                </h1>
                <p class="text-gray-500 mt-2">
                    "You are signed in. Open the "
                    <A href=Destination::Analytics.path() class="text-blue-600 hover:underline">
                        "Analytics"
                    </A>
                    " page to see todo completion across all users."
                </p>

                <button
                    on:click=on_logout
                    class="mt-6 px-4 py-2 rounded-lg text-sm font-medium text-white
                           bg-gray-500 hover:bg-gray-600 transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
