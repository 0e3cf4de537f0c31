//! Welcome Screen View
//!
//! UI state, the controller that mutates it, and the pure renderer that turns
//! state plus translations into a [`Screen`].

mod controller;
pub mod keys;
mod screen;
mod state;

pub use controller::ViewController;
pub use screen::{
    render, LanguageOption, LanguageSelector, Logo, Screen, SessionAction, SessionButton, LOGO_SRC,
};
pub use state::UiState;
