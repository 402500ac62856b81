//! Login Page
//!
//! Credential form. Validates locally, then hands off to the session.

use analytics_portal::auth::{validate_login_form, DEMO_EMAIL, DEMO_PASSWORD};
use analytics_portal::routing::Destination;
use leptos::*;
use leptos_router::*;

use crate::components::{DemoBadge, InlineLoading};
use crate::state::use_session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(DEMO_EMAIL.to_string());
    let (password, set_password) = create_signal(DEMO_PASSWORD.to_string());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let is_demo = session.is_demo();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let credentials = match validate_login_form(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_error.set(None);
        set_submitting.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(&credentials.email, &credentials.password).await {
                Ok(()) => {
                    navigate(Destination::DEFAULT_AUTHENTICATED.path(), Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center py-12">
            <div class="w-full max-w-md bg-white rounded-xl shadow-md p-8">
                <div class="text-center mb-6">
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-gray-500 mt-1">"Sign in to view your analytics"</p>
                    {is_demo.then(|| view! { <div class="mt-3"><DemoBadge /></div> })}
                </div>

                <form on:submit=on_submit class="space-y-4">
                    // Email
                    <div>
                        <label for="email" class="block text-sm text-gray-600 mb-2">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=move || submitting.get()
                            class="w-full rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label for="password" class="block text-sm text-gray-600 mb-2">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=move || submitting.get()
                            class="w-full rounded-lg px-4 py-3 border border-gray-300
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    // Inline error
                    {move || error.get().map(|message| view! {
                        <div class="rounded-lg px-4 py-3 bg-red-50 border border-red-200 text-red-700 text-sm">
                            {message}
                        </div>
                    })}

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full py-3 rounded-lg font-medium text-white bg-blue-600
                               hover:bg-blue-700 disabled:bg-blue-300 transition-colors"
                    >
                        {move || if submitting.get() {
                            view! { <InlineLoading />"Logging in..." }.into_view()
                        } else {
                            "Sign In".into_view()
                        }}
                    </button>
                </form>

                <DemoHint />
            </div>
        </div>
    }
}

/// Credentials accepted by the demo authenticator (and by reqres.in)
#[component]
fn DemoHint() -> impl IntoView {
    view! {
        <div class="mt-6 rounded-lg bg-gray-50 border border-gray-200 p-4 text-sm text-gray-600">
            <p class="font-semibold mb-1">"Demo credentials"</p>
            <p>"Email: " <code>{DEMO_EMAIL}</code></p>
            <p>"Password: " <code>{DEMO_PASSWORD}</code></p>
        </div>
    }
}
