//! Welcome Screen Components
//!
//! Each component reads one part of the rendered [`Screen`](welcome::view::Screen).

use leptos::*;

use welcome::i18n::LanguageCode;

use crate::state::WelcomeState;

/// Logo, heading and introduction
#[component]
pub fn Heading() -> impl IntoView {
    let state = expect_context::<WelcomeState>();
    let screen = state.screen;

    view! {
        <header class="welcome-header">
            <img
                src=move || screen.with(|s| s.logo.src)
                alt=move || screen.with(|s| s.logo.alt)
                class="logo"
            />
            <h1>{move || screen.with(|s| s.heading.clone())}</h1>
            <p>{move || screen.with(|s| s.intro.clone())}</p>
        </header>
    }
}

/// Start/end button and session status
#[component]
pub fn SessionPanel() -> impl IntoView {
    let state = expect_context::<WelcomeState>();
    let screen = state.screen;

    view! {
        <section class="session">
            <button on:click=move |_| state.toggle_session()>
                {move || screen.with(|s| s.session_button.label.clone())}
            </button>
            <p class="status">{move || screen.with(|s| s.status.clone())}</p>
        </section>
    }
}

/// Language status line and selector
#[component]
pub fn LanguagePanel() -> impl IntoView {
    let state = expect_context::<WelcomeState>();
    let screen = state.screen;

    let on_change = move |event: ev::Event| {
        let value = event_target_value(&event);
        match value.parse::<LanguageCode>() {
            Ok(language) => state.select_language(language),
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
    };

    view! {
        <section class="language">
            <p>{move || screen.with(|s| s.language_status.clone())}</p>
            <select
                on:change=on_change
                prop:value=move || {
                    screen.with(|s| s.language_selector.selected().map(|l| l.code()).unwrap_or_default())
                }
            >
                {move || {
                    screen.with(|s| s.language_selector.options.clone())
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.value.code() selected=option.selected>
                                {option.label}
                            </option>
                        })
                        .collect_view()
                }}
            </select>
            {move || {
                if screen.with(|s| s.loading) {
                    view! { <span class="loading-spinner" /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </section>
    }
}
