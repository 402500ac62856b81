//! Summary Card Component
//!
//! Displays a single headline figure from the analytics stats.

use leptos::*;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Caption shown under the value
    #[prop(into)]
    label: String,
    value: usize,
    /// Tailwind text color for the value
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let color = accent.unwrap_or("text-gray-800");

    view! {
        <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-200 text-center">
            <div class=format!("text-3xl font-bold {}", color)>{value}</div>
            <div class="text-gray-500 text-sm mt-1">{label}</div>
        </div>
    }
}
