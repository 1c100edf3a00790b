use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	prompt: Style::new().fg(Color::Rgb(226, 232, 240)),
	placeholder: Style::new().fg(Color::DarkGray),
	toggle: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	already_added: Style::new().fg(Color::Rgb(220, 38, 38)),
	add_button: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(22, 163, 74)),
	chip: Style::new().fg(Color::Rgb(226, 232, 240)),
	chip_remove: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(239, 68, 68)),
	empty: Style::new().fg(Color::DarkGray),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark"]);
