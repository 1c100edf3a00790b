use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::options::HIGHLIGHT_SYMBOL;
use crate::selection::SelectionList;
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

/// Glyph of the remove control.
pub const REMOVE_GLYPH: &str = "✕";
/// Columns taken by the remove control at the right edge of a chip row.
pub const REMOVE_WIDTH: u16 = 2;

/// Argument bundle for rendering the selected countries.
pub struct ChipsContext<'a> {
	pub selection: &'a SelectionList,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
	pub focused: bool,
	pub area: Rect,
}

/// Render the selection as removable chips. Returns the area holding chip rows.
pub fn render_chips(frame: &mut Frame, chips: ChipsContext<'_>, state: &mut ListState) -> Option<Rect> {
	let ChipsContext {
		selection,
		labels,
		theme,
		focused,
		area,
	} = chips;

	let title = format!(" {} ({}) ", labels.chips_title, selection.len());
	let border = if focused { theme.border } else { theme.border_fg() };
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(border)
		.title(Line::from(Span::styled(title, theme.border)));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if selection.is_empty() {
		frame.render_widget(
			Paragraph::new(Line::styled(labels.no_selection.clone(), theme.empty)),
			inner,
		);
		return None;
	}

	let row_width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
	let items: Vec<ListItem> = selection
		.iter()
		.map(|name| ListItem::new(chip_line(name, theme, row_width)))
		.collect();

	let (symbol, highlight) = if focused {
		(HIGHLIGHT_SYMBOL, theme.row_highlight)
	} else {
		("  ", Style::default())
	};
	let list = List::new(items)
		.highlight_symbol(symbol)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(highlight);
	frame.render_stateful_widget(list, inner, state);

	Some(inner)
}

fn chip_line(name: &str, theme: &Theme, row_width: usize) -> Line<'static> {
	let padding = row_width
		.saturating_sub(name.width() + usize::from(REMOVE_WIDTH))
		.saturating_add(1);
	Line::from(vec![
		Span::styled(name.to_string(), theme.chip),
		Span::raw(" ".repeat(padding)),
		Span::styled(REMOVE_GLYPH, theme.chip_remove),
	])
}
