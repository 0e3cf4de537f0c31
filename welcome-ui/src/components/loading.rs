//! Loading Component

use leptos::*;

/// Shown until the initial bundle load finishes. The text is fixed because
/// no bundle is available yet.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <span>"Loading..."</span>
        </div>
    }
}
