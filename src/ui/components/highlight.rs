use ratatui::style::Style;
use ratatui::text::Span;

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
///
/// Lower-casing can change byte lengths for some scripts; those names are
/// left unhighlighted rather than split mid-character.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
	if query.is_empty() {
		return None;
	}
	let lowered = text.to_lowercase();
	if lowered.len() != text.len() {
		return None;
	}
	let start = lowered.find(&query.to_lowercase())?;
	let end = start + query.to_lowercase().len();
	(text.is_char_boundary(start) && text.is_char_boundary(end)).then_some((start, end))
}

/// Split `text` into spans with the matched part in `highlight`.
#[must_use]
pub fn highlight_spans(text: &str, query: &str, base: Style, highlight: Style) -> Vec<Span<'static>> {
	match match_range(text, query) {
		Some((start, end)) => [
			Span::styled(text[..start].to_string(), base),
			Span::styled(text[start..end].to_string(), base.patch(highlight)),
			Span::styled(text[end..].to_string(), base),
		]
		.into_iter()
		.filter(|span| !span.content.is_empty())
		.collect(),
		None => vec![Span::styled(text.to_string(), base)],
	}
}
