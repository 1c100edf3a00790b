//! Interactive terminal front-end for the country picker.
//!
//! The [`builder`] module exposes the public-facing [`Picker`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, input
//! handling, and the reusable widgets/style definitions that power the
//! terminal application.

mod actions;
mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod style;

#[cfg(test)]
mod render_tests;

pub use app::{App, Focus};
pub use builder::Picker;
pub use config::UiLabels;
pub use runtime::run;
