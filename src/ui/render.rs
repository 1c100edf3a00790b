use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Margin};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::App;
use super::app::{FrameAreas, Focus};
use super::components::{
	ChipsContext, LoadingState, OptionsContext, PromptContext, options_height, render_chips,
	render_options, render_prompt,
};

/// Widest the picker grows on large terminals.
const MAX_WIDTH: u16 = 64;
const INPUT_HEIGHT: u16 = 3;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
			.flex(Flex::Center)
			.areas(area);

		let matches = self.matches();
		let open = self.state.is_open();
		let dropdown = if open { options_height(matches.len()) } else { 0 };
		let [input_area, options_area, chips_area, hint_area] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Length(dropdown),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(column);

		let theme = self.style.theme;
		let prompt = render_prompt(
			frame,
			PromptContext {
				input: &self.query_input,
				labels: &self.labels,
				theme: &theme,
				open,
				focused: self.focus == Focus::Search,
				area: input_area,
			},
			LoadingState {
				loading: self.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);

		let options = if open {
			render_options(
				frame,
				OptionsContext {
					matches: &matches,
					query: self.state.input(),
					status: self.state.status(),
					labels: &self.labels,
					theme: &theme,
					area: options_area,
				},
				&mut self.options,
			)
		} else {
			None
		};

		let chips = render_chips(
			frame,
			ChipsContext {
				selection: self.state.selection(),
				labels: &self.labels,
				theme: &theme,
				focused: self.focus == Focus::Chips,
				area: chips_area,
			},
			&mut self.chips,
		);

		frame.render_widget(Paragraph::new(self.hint_line()), hint_area);

		self.areas = FrameAreas {
			input: prompt.input,
			toggle: prompt.toggle,
			options,
			chips,
		};
	}

	fn hint_line(&self) -> Line<'static> {
		let theme = &self.style.theme;
		if let Some(notice) = &self.notice {
			return Line::styled(notice.clone(), theme.already_added);
		}
		match self.focus {
			Focus::Chips => match self.highlighted_chip() {
				Some(name) => Line::styled(
					format!("{} · Enter/Del remove · Tab search · Esc quit", self.labels.remove_label(&name)),
					theme.empty,
				),
				None => Line::styled("Tab search · Esc quit", theme.empty),
			},
			Focus::Search => Line::styled(
				"↑↓ choose · Enter add · F4 toggle list · Tab selected · Esc quit",
				theme.empty,
			),
		}
	}
}
