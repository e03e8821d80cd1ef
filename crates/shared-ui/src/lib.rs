//! Presentational components shared by the HealthDesk views.
//!
//! Each component links its own stylesheet; colors come from the CSS
//! variables declared in the app's base theme.

pub mod components;

pub use components::*;
