//! Welcome Screen State
//!
//! Wraps the view controller in Leptos signals. The controller owns the
//! truth; `screen` is re-rendered from it after every user action.

use leptos::*;
use std::rc::Rc;
use std::sync::Arc;

use welcome::i18n::{LanguageCode, LanguageSwitch, Localizer};
use welcome::view::{Screen, ViewController};

use crate::source::FetchBundleSource;

/// State provided to all components
#[derive(Clone)]
pub struct WelcomeState {
    pub controller: Rc<ViewController<FetchBundleSource>>,
    /// Last rendered screen
    pub screen: RwSignal<Screen>,
    /// The initial bundle load has finished (successfully or not)
    pub ready: RwSignal<bool>,
}

/// Create the controller, provide the state, and start the initial load
pub fn provide_welcome_state() -> WelcomeState {
    let source = FetchBundleSource::from_location();
    let controller = Rc::new(ViewController::new(Arc::new(Localizer::new(source))));

    let state = WelcomeState {
        screen: create_rw_signal(controller.render()),
        ready: create_rw_signal(false),
        controller,
    };
    provide_context(state.clone());

    let init_state = state.clone();
    spawn_local(async move {
        let outcome = init_state.controller.init().await;
        if let LanguageSwitch::Failed { language } = outcome {
            web_sys::console::warn_1(
                &format!("Bundle '{}' could not be loaded; showing keys", language).into(),
            );
        }
        init_state.ready.set(true);
        init_state.refresh();
    });

    state
}

impl WelcomeState {
    /// Re-render the screen from the controller
    pub fn refresh(&self) {
        self.screen.set(self.controller.render());
    }

    /// Select a language. The selection shows immediately; bundle switches
    /// start in the order selections are made, since local tasks are polled
    /// first-in first-out.
    pub fn select_language(&self, language: LanguageCode) {
        self.controller.select_language(language);
        self.refresh();

        let state = self.clone();
        let localizer = Arc::clone(self.controller.localizer());
        spawn_local(async move {
            localizer.set_language(language).await;
            state.refresh();
        });
    }

    /// Start or end the session
    pub fn toggle_session(&self) {
        self.controller.on_toggle_session();
        self.refresh();
    }
}
