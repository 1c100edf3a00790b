use ratatui::style::{Color, Style};

/// Styles for every element of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Box borders and panel titles.
	pub border: Style,
	/// Search text as typed.
	pub prompt: Style,
	/// Placeholder shown while the search text is empty.
	pub placeholder: Style,
	/// Dropdown arrow.
	pub toggle: Style,
	/// Highlighted dropdown row or chip.
	pub row_highlight: Style,
	/// Part of an option matching the query.
	pub highlight: Style,
	/// Options that are already in the selection.
	pub already_added: Style,
	/// The add control next to addable options.
	pub add_button: Style,
	/// Selected country names.
	pub chip: Style,
	/// The remove control next to each chip.
	pub chip_remove: Style,
	/// Status lines, hints, and empty states.
	pub empty: Style,
}

impl Theme {
	/// Border style with the background stripped, for nested blocks.
	#[must_use]
	pub fn border_fg(&self) -> Style {
		Style::new().fg(self.border.fg.unwrap_or(Color::Reset))
	}
}

/// A statically defined theme, usable in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	#[must_use]
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			aliases: &[],
			theme,
		}
	}

	#[must_use]
	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
