//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the picker. [`StyleConfig`] is the
//! container the [`App`](crate::ui::App) renders with.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
