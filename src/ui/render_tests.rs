use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, Focus, Picker};
use crate::catalog::{Catalog, CatalogError, CatalogUpdate};
use crate::selector::SelectorState;
use crate::storage::MemoryStorage;

fn state(stored: &str) -> SelectorState {
	SelectorState::new(Box::new(MemoryStorage::new().with_item("list", stored)), "list").unwrap()
}

fn ready(stored: &str) -> SelectorState {
	state(stored).with_catalog(Catalog::from_names(["United States", "Canada", "Mexico"]))
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn left_click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

#[test]
fn closed_picker_shows_placeholder_and_empty_selection() {
	let mut app = Picker::new(ready("[]")).into_app();
	let view = render(&mut app);

	assert!(view.contains("Search countries..."), "{view}");
	assert!(view.contains('▼'), "{view}");
	assert!(view.contains("Selected (0)"), "{view}");
	assert!(view.contains("No countries selected yet"), "{view}");
	assert!(!view.contains("[ Add ]"), "{view}");
	assert!(app.areas.options.is_none());
}

#[test]
fn open_dropdown_marks_already_added_rows() {
	let mut app = Picker::new(ready(r#"["Canada"]"#)).start_open(true).into_app();
	let view = render(&mut app);

	assert!(view.contains('▲'), "{view}");
	assert!(view.contains("Countries"), "{view}");
	assert!(view.contains("Canada (already added)"), "{view}");
	assert_eq!(view.matches("[ Add ]").count(), 2, "{view}");
	assert!(view.contains("▶ United States"), "{view}");
	assert!(view.contains("Canada"));
	assert!(view.contains('✕'), "{view}");
}

#[test]
fn unmatched_query_reports_missing_country() {
	let mut app = Picker::new(ready("[]")).with_initial_query("zz").into_app();
	let view = render(&mut app);
	assert!(view.contains("Could not find country"), "{view}");
}

#[test]
fn loading_and_failed_catalogs_are_reported() {
	let (tx, rx) = mpsc::channel();
	let mut app = Picker::new(state("[]"))
		.with_catalog_updates(rx)
		.start_open(true)
		.into_app();
	let view = render(&mut app);
	assert!(view.contains("Loading countries"), "{view}");

	let err: CatalogError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
	tx.send(CatalogUpdate::Failed(err)).unwrap();
	app.pump_catalog_updates();
	let view = render(&mut app);
	assert!(view.contains("Could not load countries"), "{view}");
	assert!(!view.contains("Loading countries"), "{view}");
}

#[test]
fn focused_chip_exposes_remove_label() {
	let mut app = Picker::new(ready(r#"["Mexico","Canada"]"#)).into_app();
	app.set_focus(Focus::Chips);
	let view = render(&mut app);

	assert!(view.contains("Selected (2)"), "{view}");
	assert!(view.contains("Remove Mexico"), "{view}");
	assert_eq!(view.matches('✕').count(), 2, "{view}");
}

#[test]
fn clicks_on_rendered_controls_drive_the_picker() {
	let mut app = Picker::new(ready("[]")).into_app();
	render(&mut app);

	let toggle = app.areas.toggle;
	app.handle_mouse(left_click(toggle.x + 1, toggle.y));
	assert!(app.state.is_open());

	render(&mut app);
	let options = app.areas.options.expect("dropdown rows");
	app.handle_mouse(left_click(options.right() - 1, options.y));
	assert_eq!(app.state.selection().as_slice(), ["United States"]);

	let view = render(&mut app);
	assert!(view.contains("Selected (1)"), "{view}");
	assert!(view.contains("United States (already added)"), "{view}");

	let chips = app.areas.chips.expect("chip rows");
	app.handle_mouse(left_click(chips.right() - 1, chips.y));
	assert!(app.state.selection().is_empty());
}
