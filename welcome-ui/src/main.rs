//! Welcome Screen
//!
//! Browser front end for the localized welcome screen, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. Translation bundles are fetched from
//! `/locales/{code}/main.json` on the serving origin; the screen itself is
//! produced by `welcome::view::render` and only laid out here.

use leptos::*;

mod app;
mod components;
mod source;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
