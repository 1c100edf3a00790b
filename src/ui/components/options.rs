use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_spans;
use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::selector::{CatalogStatus, OptionEntry};
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Most option rows shown before the list scrolls.
pub const MAX_VISIBLE_OPTIONS: usize = 10;

/// Argument bundle for rendering the dropdown.
pub struct OptionsContext<'a> {
	pub matches: &'a [OptionEntry],
	pub query: &'a str,
	pub status: &'a CatalogStatus,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
	pub area: Rect,
}

/// Total height of the dropdown, borders included.
#[must_use]
pub fn options_height(match_count: usize) -> u16 {
	let rows = match_count.clamp(1, MAX_VISIBLE_OPTIONS);
	u16::try_from(rows).unwrap_or(1) + 2
}

/// Render the dropdown. Returns the area holding option rows, if any.
pub fn render_options(frame: &mut Frame, options: OptionsContext<'_>, state: &mut ListState) -> Option<Rect> {
	let OptionsContext {
		matches,
		query,
		status,
		labels,
		theme,
		area,
	} = options;

	let title = Line::from(Span::styled(format!(" {} ", labels.options_title), theme.border));
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_fg())
		.title(title);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if matches.is_empty() {
		frame.render_widget(Paragraph::new(status_line(status, labels, theme)), inner);
		return None;
	}

	let viewport = usize::from(inner.height);
	let metrics = ScrollMetrics::compute(matches.len(), viewport);
	let offset = visible_offset(state.offset(), state.selected(), viewport, metrics.max_scroll);
	*state.offset_mut() = offset;

	let rows = render_scrollbar(frame, inner, offset, metrics, theme);
	let row_width = usize::from(rows.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
	let items: Vec<ListItem> = matches
		.iter()
		.map(|entry| ListItem::new(option_line(entry, query, labels, theme, row_width)))
		.collect();

	let list = List::new(items)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(theme.row_highlight);
	frame.render_stateful_widget(list, rows, state);

	Some(rows)
}

/// Width of the add control at the right edge of each addable row.
#[must_use]
pub fn add_button_width(labels: &UiLabels) -> u16 {
	u16::try_from(labels.add_button().width()).unwrap_or(u16::MAX)
}

fn option_line(entry: &OptionEntry, query: &str, labels: &UiLabels, theme: &Theme, row_width: usize) -> Line<'static> {
	if entry.already_added {
		let mut spans = highlight_spans(&entry.name, query, theme.already_added, theme.highlight);
		spans.push(Span::styled(format!(" {}", labels.already_added_suffix), theme.already_added));
		return Line::from(spans);
	}

	let button = labels.add_button();
	let used = entry.name.width() + button.width();
	let padding = row_width.saturating_sub(used).max(1);
	let mut spans = highlight_spans(&entry.name, query, theme.chip, theme.highlight);
	spans.push(Span::raw(" ".repeat(padding)));
	spans.push(Span::styled(button, theme.add_button));
	Line::from(spans)
}

fn status_line(status: &CatalogStatus, labels: &UiLabels, theme: &Theme) -> Line<'static> {
	match status {
		CatalogStatus::Loading => Line::styled(labels.loading.clone(), theme.empty),
		CatalogStatus::Failed(reason) => {
			Line::styled(format!("{}: {reason}", labels.load_failed), theme.already_added)
		}
		CatalogStatus::Ready => Line::styled(labels.no_matches.clone(), theme.empty),
	}
}

/// Offset that keeps the selected row inside the viewport.
fn visible_offset(offset: usize, selected: Option<usize>, viewport: usize, max_scroll: usize) -> usize {
	let offset = offset.min(max_scroll);
	match selected {
		Some(index) if index < offset => index,
		Some(index) if viewport > 0 && index >= offset + viewport => index + 1 - viewport,
		_ => offset,
	}
	.min(max_scroll)
}
