//! State Management
//!
//! The view controller and the reactive copy of its rendered screen.

pub mod global;

pub use global::{provide_welcome_state, WelcomeState};
