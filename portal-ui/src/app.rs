//! App Root Component
//!
//! Main application component with routing and the session provider.

use analytics_portal::config::Config;
use analytics_portal::routing::{show_navigation, Destination};
use leptos::*;
use leptos_router::*;

use crate::api::TodoClient;
use crate::components::{Fallback, Guarded, Nav};
use crate::pages::{Analytics, Dashboard, Login};
use crate::state::{provide_session_context, use_session};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide the session to all components and restore any stored login
    provide_session_context(&config.auth);
    provide_context(TodoClient::new(config.analytics.todos_url.clone()));

    let session = use_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-800 flex flex-col">
                // Navigation header, signed-in users only
                {move || show_navigation(session.status.get()).then(|| view! { <Nav /> })}

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route
                            path=Destination::Login.path()
                            view=|| view! {
                                <Guarded destination=Destination::Login>
                                    <Login />
                                </Guarded>
                            }
                        />
                        <Route
                            path=Destination::Dashboard.path()
                            view=|| view! {
                                <Guarded destination=Destination::Dashboard>
                                    <Dashboard />
                                </Guarded>
                            }
                        />
                        <Route
                            path=Destination::Analytics.path()
                            view=|| view! {
                                <Guarded destination=Destination::Analytics>
                                    <Analytics />
                                </Guarded>
                            }
                        />
                        <Route
                            path="/*any"
                            view=Fallback
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
