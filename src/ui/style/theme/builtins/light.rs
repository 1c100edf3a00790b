use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	border: Style::new().fg(Color::Rgb(209, 213, 219)),
	prompt: Style::new().fg(Color::Black),
	placeholder: Style::new().fg(Color::Rgb(156, 163, 175)),
	toggle: Style::new().fg(Color::Rgb(156, 163, 175)),
	row_highlight: Style::new()
		.bg(Color::Rgb(229, 231, 235))
		.fg(Color::Rgb(59, 130, 246)),
	highlight: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	already_added: Style::new().fg(Color::Rgb(220, 38, 38)),
	add_button: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(22, 163, 74)),
	chip: Style::new().fg(Color::Rgb(31, 41, 55)),
	chip_remove: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(239, 68, 68)),
	empty: Style::new().fg(Color::Rgb(107, 114, 128)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
