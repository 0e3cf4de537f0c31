//! App Root Component

use leptos::*;

use crate::components::{Heading, LanguagePanel, Loading, SessionPanel};
use crate::state::provide_welcome_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_welcome_state();
    let ready = state.ready;

    view! {
        <main class="welcome">
            {move || {
                if ready.get() {
                    view! {
                        <Heading />
                        <SessionPanel />
                        <LanguagePanel />
                    }.into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </main>
    }
}
