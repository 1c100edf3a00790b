//! Core state container for the terminal front-end.
//!
//! [`App`] wraps a [`SelectorState`] with everything that only matters while
//! the picker is on screen: focus, list cursors, the text input widget, and
//! the screen areas recorded by the last draw for mouse hit-testing.

use std::sync::mpsc::{Receiver, TryRecvError};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use tracing::warn;

use crate::catalog::CatalogUpdate;
use crate::selection::SelectionError;
use crate::selector::{OptionEntry, SelectorState};
use crate::ui::config::UiLabels;
use crate::ui::input::QueryInput;
use crate::ui::style::{StyleConfig, Theme};

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Search,
	Chips,
}

/// Screen regions recorded while drawing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FrameAreas {
	pub input: Rect,
	pub toggle: Rect,
	/// Rows of the dropdown list, excluding borders and scrollbar.
	pub options: Option<Rect>,
	/// Rows of the selected-countries list, excluding borders.
	pub chips: Option<Rect>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub state: SelectorState,
	pub query_input: QueryInput<'a>,
	pub style: StyleConfig,
	pub(crate) labels: UiLabels,
	pub(crate) focus: Focus,
	pub(crate) options: ListState,
	pub(crate) chips: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) catalog_updates: Option<Receiver<CatalogUpdate>>,
	pub(crate) areas: FrameAreas,
	/// Last persistence problem, shown in the hint line until the next change.
	pub(crate) notice: Option<String>,
}

impl<'a> App<'a> {
	pub fn new(state: SelectorState) -> Self {
		let query_input = QueryInput::new(state.input());
		let mut app = Self {
			state,
			query_input,
			style: StyleConfig::default(),
			labels: UiLabels::default(),
			focus: Focus::Search,
			options: ListState::default(),
			chips: ListState::default(),
			throbber_state: ThrobberState::default(),
			catalog_updates: None,
			areas: FrameAreas::default(),
			notice: None,
		};
		app.apply_input_style();
		app.reset_option_cursor();
		app.ensure_chip_selection();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.apply_input_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	pub fn set_catalog_updates(&mut self, updates: Receiver<CatalogUpdate>) {
		self.catalog_updates = Some(updates);
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	fn apply_input_style(&mut self) {
		self.query_input.set_style(self.style.theme.prompt);
		self.query_input.set_focused(self.focus == Focus::Search);
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.query_input.set_focused(focus == Focus::Search);
		if focus == Focus::Chips {
			self.ensure_chip_selection();
		}
	}

	/// Drain the catalog channel; it yields at most one update.
	pub(crate) fn pump_catalog_updates(&mut self) {
		let Some(rx) = self.catalog_updates.take() else {
			return;
		};

		match rx.try_recv() {
			Ok(update) => {
				self.state.apply_catalog_update(update);
				self.reset_option_cursor();
			}
			Err(TryRecvError::Empty) => self.catalog_updates = Some(rx),
			Err(TryRecvError::Disconnected) => {
				warn!("catalog worker exited without a result");
				self.state.fail_catalog("catalog worker exited");
				self.reset_option_cursor();
			}
		}
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.catalog_updates.is_some()
	}

	pub(crate) fn matches(&self) -> Vec<OptionEntry> {
		self.state.matches()
	}

	/// Push the text widget's contents into the selector and open the dropdown.
	pub(crate) fn sync_query(&mut self) {
		self.state.set_input(self.query_input.text());
		self.state.open();
		self.reset_option_cursor();
	}

	pub(crate) fn reset_option_cursor(&mut self) {
		let select = if self.matches().is_empty() { None } else { Some(0) };
		self.options.select(select);
		*self.options.offset_mut() = 0;
	}

	pub(crate) fn highlighted_option(&self) -> Option<OptionEntry> {
		let index = self.options.selected()?;
		self.matches().into_iter().nth(index)
	}

	pub(crate) fn move_option(&mut self, delta: isize) {
		let len = self.matches().len();
		self.options.select(step(self.options.selected(), delta, len));
	}

	pub(crate) fn ensure_chip_selection(&mut self) {
		let len = self.state.selection().len();
		let select = match self.chips.selected() {
			_ if len == 0 => None,
			Some(index) if index >= len => Some(len - 1),
			Some(index) => Some(index),
			None => Some(0),
		};
		self.chips.select(select);
	}

	pub(crate) fn move_chip(&mut self, delta: isize) {
		let len = self.state.selection().len();
		self.chips.select(step(self.chips.selected(), delta, len));
	}

	pub(crate) fn highlighted_chip(&self) -> Option<String> {
		let index = self.chips.selected()?;
		self.state.selection().iter().nth(index).map(str::to_string)
	}

	/// Add `name` and reset the search text, mirroring the selector.
	pub(crate) fn add(&mut self, name: &str) {
		let result = self.state.add(name);
		self.query_input.clear();
		self.reset_option_cursor();
		self.ensure_chip_selection();
		self.record(result);
	}

	pub(crate) fn remove(&mut self, name: &str) {
		let result = self.state.remove(name);
		self.ensure_chip_selection();
		self.reset_option_cursor_keeping_position();
		self.record(result);
		if self.state.selection().is_empty() {
			self.set_focus(Focus::Search);
		}
	}

	fn reset_option_cursor_keeping_position(&mut self) {
		let len = self.matches().len();
		let select = match self.options.selected() {
			_ if len == 0 => None,
			Some(index) => Some(index.min(len - 1)),
			None => Some(0),
		};
		self.options.select(select);
	}

	fn record(&mut self, result: Result<bool, SelectionError>) {
		match result {
			Ok(_) => self.notice = None,
			Err(err) => {
				warn!(error = %err, "failed to persist selection");
				self.notice = Some(format!("Could not save selection: {err}"));
			}
		}
	}
}

/// Move a list cursor by `delta`, clamped to `len`.
fn step(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
	if len == 0 {
		return None;
	}
	let current = current.unwrap_or(0);
	let next = current.saturating_add_signed(delta).min(len - 1);
	Some(next)
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;
	use crate::catalog::Catalog;
	use crate::selector::CatalogStatus;
	use crate::storage::MemoryStorage;

	fn sample_app() -> App<'static> {
		let state = SelectorState::new(Box::new(MemoryStorage::new()), "list")
			.unwrap()
			.with_catalog(Catalog::from_names(["United States", "Canada", "Mexico"]));
		App::new(state)
	}

	#[test]
	fn step_clamps_to_bounds() {
		assert_eq!(step(Some(0), -1, 3), Some(0));
		assert_eq!(step(Some(2), 1, 3), Some(2));
		assert_eq!(step(None, 1, 3), Some(1));
		assert_eq!(step(Some(1), 1, 0), None);
	}

	#[test]
	fn catalog_update_replaces_loading_state() {
		let state = SelectorState::new(Box::new(MemoryStorage::new()), "list").unwrap();
		let mut app = App::new(state);
		let (tx, rx) = mpsc::channel();
		app.set_catalog_updates(rx);
		assert!(app.is_loading());

		tx.send(CatalogUpdate::Loaded(Catalog::from_names(["Peru"])))
			.unwrap();
		app.pump_catalog_updates();

		assert!(!app.is_loading());
		assert_eq!(app.matches().len(), 1);
		assert_eq!(app.options.selected(), Some(0));
	}

	#[test]
	fn worker_exiting_without_update_marks_catalog_failed() {
		let state = SelectorState::new(Box::new(MemoryStorage::new()), "list").unwrap();
		let mut app = App::new(state);
		let (tx, rx) = mpsc::channel::<CatalogUpdate>();
		app.set_catalog_updates(rx);
		drop(tx);

		app.pump_catalog_updates();

		assert!(!app.is_loading());
		assert_eq!(
			app.state.status(),
			&CatalogStatus::Failed("catalog worker exited".into())
		);
	}

	#[test]
	fn adding_highlighted_option_clears_query() {
		let mut app = sample_app();
		app.query_input.set_text("mex");
		app.sync_query();
		let option = app.highlighted_option().expect("a match");
		app.add(&option.name);

		assert_eq!(app.query_input.text(), "");
		assert_eq!(app.state.input(), "");
		assert!(app.state.selection().contains("Mexico"));
		assert_eq!(app.chips.selected(), Some(0));
	}

	#[test]
	fn removing_last_chip_returns_focus_to_search() {
		let mut app = sample_app();
		app.add("Canada");
		app.set_focus(Focus::Chips);
		app.remove("Canada");
		assert_eq!(app.focus(), Focus::Search);
		assert_eq!(app.chips.selected(), None);
	}
}
