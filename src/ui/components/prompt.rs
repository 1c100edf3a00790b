use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::config::UiLabels;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Glyph of the dropdown toggle.
#[must_use]
pub fn toggle_glyph(open: bool) -> &'static str {
	if open { "▲" } else { "▼" }
}

/// Argument bundle for rendering the search row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
	pub open: bool,
	pub focused: bool,
	pub area: Rect,
}

/// Progress information shown at the right of the search row.
pub struct LoadingState<'a> {
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Screen regions of the search row, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAreas {
	pub input: Rect,
	pub toggle: Rect,
}

/// Render the bordered search input with its toggle on the right.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, loading: LoadingState<'_>) -> PromptAreas {
	let PromptContext {
		input,
		labels,
		theme,
		open,
		focused,
		area,
	} = prompt;

	let border = if focused { theme.border } else { theme.border_fg() };
	let block = Block::default().borders(Borders::ALL).border_style(border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let status = if loading.loading {
		u16::try_from(labels.loading.chars().count() + 3).unwrap_or(u16::MAX)
	} else {
		0
	};
	let [text_area, status_area, toggle_area] = Layout::horizontal([
		Constraint::Min(1),
		Constraint::Length(status),
		Constraint::Length(2),
	])
	.areas(inner);

	if input.text().is_empty() {
		let placeholder = Paragraph::new(labels.placeholder.as_str()).style(theme.placeholder);
		frame.render_widget(placeholder, text_area);
		if focused && text_area.width > 0
			&& let Some(cell) = frame.buffer_mut().cell_mut((text_area.x, text_area.y))
		{
			cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
		}
	} else {
		input.render(frame, text_area);
	}

	if loading.loading && status_area.width > 0 {
		let spinner = Throbber::default()
			.style(theme.empty)
			.throbber_style(theme.empty)
			.to_symbol_span(loading.throbber_state);
		let line = Line::from(vec![spinner, Span::styled(labels.loading.clone(), theme.empty)]);
		frame.render_widget(Paragraph::new(line), status_area);
	}

	let toggle = Paragraph::new(format!(" {}", toggle_glyph(open))).style(theme.toggle);
	frame.render_widget(toggle, toggle_area);

	PromptAreas {
		input: text_area,
		toggle: toggle_area,
	}
}
