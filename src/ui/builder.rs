use std::sync::mpsc::Receiver;

use anyhow::{Result, bail};

use super::App;
use crate::catalog::{CatalogSource, CatalogUpdate, spawn_catalog_fetch};
use crate::selector::{PickerOutcome, SelectorState};
use crate::ui::config::UiLabels;
use crate::ui::style::{self, Theme};

/// A small builder for configuring the interactive country picker.
///
/// ```no_run
/// use country_picker::{HttpSource, MemoryStorage, Picker, SelectorState};
///
/// let state = SelectorState::new(Box::new(MemoryStorage::new()), "list")?;
/// let outcome = Picker::new(state)
///     .with_source(HttpSource::default())
///     .with_theme_name("solarized")?
///     .run()?;
/// println!("{:?}", outcome.selection);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Picker {
	state: SelectorState,
	catalog_updates: Option<Receiver<CatalogUpdate>>,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	initial_query: Option<String>,
	start_open: bool,
}

impl Picker {
	#[must_use]
	pub fn new(state: SelectorState) -> Self {
		Self {
			state,
			catalog_updates: None,
			labels: None,
			theme: None,
			initial_query: None,
			start_open: false,
		}
	}

	/// Fetch the catalog from `source` on a background thread.
	#[must_use]
	pub fn with_source<S: CatalogSource>(self, source: S) -> Self {
		self.with_catalog_updates(spawn_catalog_fetch(source))
	}

	#[must_use]
	pub fn with_catalog_updates(mut self, updates: Receiver<CatalogUpdate>) -> Self {
		self.catalog_updates = Some(updates);
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a registered theme by name or alias.
	pub fn with_theme_name(mut self, name: &str) -> Result<Self> {
		let Some(theme) = style::by_name(name) else {
			bail!("unknown theme `{name}`; available: {}", style::names().join(", "));
		};
		self.theme = Some(theme);
		Ok(self)
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Show the dropdown as soon as the picker starts.
	#[must_use]
	pub fn start_open(mut self, open: bool) -> Self {
		self.start_open = open;
		self
	}

	/// Build the [`App`] without entering the terminal.
	#[must_use]
	pub fn into_app<'a>(self) -> App<'a> {
		let Self {
			mut state,
			catalog_updates,
			labels,
			theme,
			initial_query,
			start_open,
		} = self;

		let has_query = initial_query.as_deref().is_some_and(|query| !query.is_empty());
		if let Some(query) = initial_query {
			state.set_input(query);
		}
		if start_open || has_query {
			state.open();
		}

		let mut app = App::new(state);
		if let Some(labels) = labels {
			app.set_labels(labels);
		}
		if let Some(theme) = theme {
			app.set_theme(theme);
		}
		if let Some(updates) = catalog_updates {
			app.set_catalog_updates(updates);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickerOutcome> {
		self.into_app().run()
	}
}
