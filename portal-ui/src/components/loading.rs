//! Loading Component
//!
//! Spinners shown while a request is outstanding.

use leptos::*;

/// Block loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-3 py-12 text-gray-500">
            <div class="loading-spinner w-8 h-8" />
            <span>{message}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4 mr-2" />
    }
}
