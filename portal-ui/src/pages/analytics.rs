//! Analytics Page
//!
//! Fetches the todo list and shows completion charts and totals.

use analytics_portal::analytics::{load_stats, TodoStats};
use leptos::*;

use crate::api::TodoClient;
use crate::components::{Loading, StatusPieChart, SummaryCard, UserBarChart};

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let client = use_context::<TodoClient>().expect("TodoClient not found");

    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<&'static str>);
    let stats = create_rw_signal(None::<TodoStats>);

    // Fetch once on mount
    create_effect(move |_| {
        let client = client.clone();
        spawn_local(async move {
            loading.set(true);
            match load_stats(&client).await {
                Ok(loaded) => {
                    error.set(None);
                    stats.set(Some(loaded));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-gray-500 mt-1">"Todo completion across all users"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <section class="bg-white rounded-xl shadow-sm p-6">
                            <Loading message="Loading analytics data..." />
                        </section>
                    }
                    .into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <section class="bg-white rounded-xl shadow-sm p-6 border border-red-200">
                            <h2 class="text-xl font-semibold text-red-700">"Error"</h2>
                            <p class="text-red-600 mt-2">{message}</p>
                        </section>
                    }
                    .into_view();
                }

                match stats.get() {
                    Some(stats) => view! { <StatsView stats=stats /> }.into_view(),
                    None => view! {}.into_view(),
                }
            }}
        </div>
    }
}

/// Charts and summary cards for loaded stats
#[component]
fn StatsView(stats: TodoStats) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <section class="bg-white rounded-xl shadow-sm p-6">
                <h2 class="text-xl font-semibold mb-4">"Todo Status Distribution"</h2>
                <StatusPieChart stats=stats.clone() />
            </section>

            <section class="bg-white rounded-xl shadow-sm p-6">
                <h2 class="text-xl font-semibold mb-4">"Todos per User"</h2>
                <UserBarChart stats=stats.clone() />
            </section>
        </div>

        <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <SummaryCard label="Total Todos" value=stats.total />
            <SummaryCard label="Completed" value=stats.completed accent="text-green-600" />
            <SummaryCard label="Pending" value=stats.pending accent="text-yellow-600" />
            <SummaryCard label="Unique Users" value=stats.distinct_users accent="text-blue-600" />
        </section>
    }
}
