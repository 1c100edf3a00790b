use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use super::app::Focus;
use super::components::{REMOVE_WIDTH, add_button_width, point_in_rect};
use super::components::options::MAX_VISIBLE_OPTIONS;
use crate::selector::PickerOutcome;

const PAGE: isize = MAX_VISIBLE_OPTIONS as isize;

impl<'a> App<'a> {
	/// Apply a key press. Returns the outcome once the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);

		match key.code {
			KeyCode::Char('c') if ctrl => return Some(self.state.outcome()),
			KeyCode::Esc => {
				if !self.state.is_open() {
					return Some(self.state.outcome());
				}
				self.state.close();
			}
			KeyCode::F(4) => self.state.toggle(),
			KeyCode::Char('o') if ctrl => self.state.toggle(),
			KeyCode::Down if alt => self.state.toggle(),
			KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::Chips => self.handle_chip_key(key),
			},
		}
		None
	}

	fn cycle_focus(&mut self) {
		let next = match self.focus {
			Focus::Search if !self.state.selection().is_empty() => Focus::Chips,
			_ => Focus::Search,
		};
		self.set_focus(next);
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up if self.state.is_open() => self.move_option(-1),
			KeyCode::Down if self.state.is_open() => self.move_option(1),
			KeyCode::Down => self.state.open(),
			KeyCode::PageUp if self.state.is_open() => self.move_option(-PAGE),
			KeyCode::PageDown if self.state.is_open() => self.move_option(PAGE),
			KeyCode::Enter if self.state.is_open() => self.add_highlighted(),
			KeyCode::Enter => self.state.open(),
			_ => {
				if self.query_input.input(key) {
					self.sync_query();
				}
			}
		}
	}

	fn handle_chip_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.move_chip(-1),
			KeyCode::Down => self.move_chip(1),
			KeyCode::Enter | KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
				self.remove_highlighted();
			}
			KeyCode::Char(_) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.set_focus(Focus::Search);
				self.handle_search_key(key);
			}
			_ => {}
		}
	}

	fn add_highlighted(&mut self) {
		if let Some(entry) = self.highlighted_option()
			&& !entry.already_added
		{
			self.add(&entry.name);
		}
	}

	fn remove_highlighted(&mut self) {
		if let Some(name) = self.highlighted_chip() {
			self.remove(&name);
		}
	}

	/// Apply a mouse event against the areas recorded by the last draw.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
			MouseEventKind::ScrollDown if self.state.is_open() => self.move_option(1),
			MouseEventKind::ScrollUp if self.state.is_open() => self.move_option(-1),
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		let areas = self.areas;
		if point_in_rect(column, row, areas.toggle) {
			self.set_focus(Focus::Search);
			self.state.toggle();
		} else if point_in_rect(column, row, areas.input) {
			self.set_focus(Focus::Search);
			self.state.open();
		} else if let Some(area) = areas.options
			&& point_in_rect(column, row, area)
		{
			self.click_option(area, column, row);
		} else if let Some(area) = areas.chips
			&& point_in_rect(column, row, area)
		{
			self.click_chip(area, column, row);
		}
	}

	fn click_option(&mut self, area: ratatui::layout::Rect, column: u16, row: u16) {
		let index = self.options.offset() + usize::from(row - area.y);
		let Some(entry) = self.matches().into_iter().nth(index) else {
			return;
		};
		self.set_focus(Focus::Search);
		self.options.select(Some(index));

		let button_start = area.right().saturating_sub(add_button_width(&self.labels));
		if !entry.already_added && column >= button_start {
			self.add(&entry.name);
		}
	}

	fn click_chip(&mut self, area: ratatui::layout::Rect, column: u16, row: u16) {
		let index = self.chips.offset() + usize::from(row - area.y);
		let Some(name) = self.state.selection().iter().nth(index).map(str::to_string) else {
			return;
		};
		self.set_focus(Focus::Chips);
		self.chips.select(Some(index));

		if column >= area.right().saturating_sub(REMOVE_WIDTH) {
			self.remove(&name);
		}
	}
}
