use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	toggle: Style::new().fg(Color::Rgb(42, 161, 152)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	highlight: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	already_added: Style::new().fg(Color::Rgb(220, 50, 47)),
	add_button: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(133, 153, 0)),
	chip: Style::new().fg(Color::Rgb(147, 161, 161)),
	chip_remove: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(220, 50, 47)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
