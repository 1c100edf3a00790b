use tracing::{debug, info};

use super::PickerOutcome;
use crate::catalog::{Catalog, CatalogUpdate};
use crate::selection::{SelectionError, SelectionList};
use crate::storage::KeyValueStore;

/// Progress of the one-shot catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
	Loading,
	Ready,
	Failed(String),
}

/// One row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
	pub name: String,
	/// The name is already in the selection and cannot be added again.
	pub already_added: bool,
}

pub struct SelectorState {
	catalog: Catalog,
	status: CatalogStatus,
	input: String,
	open: bool,
	selection: SelectionList,
	store: Box<dyn KeyValueStore>,
	key: String,
}

impl std::fmt::Debug for SelectorState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SelectorState")
			.field("catalog", &self.catalog.len())
			.field("status", &self.status)
			.field("input", &self.input)
			.field("open", &self.open)
			.field("selection", &self.selection)
			.field("store", &self.store.location())
			.field("key", &self.key)
			.finish()
	}
}

impl SelectorState {
	/// Read the selection stored under `key` and start waiting for the catalog.
	pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Result<Self, SelectionError> {
		let key = key.into();
		let selection = SelectionList::load(store.as_ref(), &key)?;
		info!(
			store = %store.location(),
			key = %key,
			count = selection.len(),
			"selection restored"
		);

		Ok(Self {
			catalog: Catalog::default(),
			status: CatalogStatus::Loading,
			input: String::new(),
			open: false,
			selection,
			store,
			key,
		})
	}

	/// Install an already available catalog, skipping the loading phase.
	#[must_use]
	pub fn with_catalog(mut self, catalog: Catalog) -> Self {
		self.catalog = catalog;
		self.status = CatalogStatus::Ready;
		self
	}

	pub fn apply_catalog_update(&mut self, update: CatalogUpdate) {
		match update {
			CatalogUpdate::Loaded(catalog) => {
				self.catalog = catalog;
				self.status = CatalogStatus::Ready;
			}
			CatalogUpdate::Failed(err) => {
				self.status = CatalogStatus::Failed(err.to_string());
			}
		}
	}

	/// Record that the catalog will never arrive.
	pub fn fail_catalog(&mut self, reason: impl Into<String>) {
		self.status = CatalogStatus::Failed(reason.into());
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn status(&self) -> &CatalogStatus {
		&self.status
	}

	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn set_input(&mut self, text: impl Into<String>) {
		self.input = text.into();
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Focusing the input always opens the dropdown.
	pub fn open(&mut self) {
		self.open = true;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	/// The arrow control flips the dropdown.
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionList {
		&self.selection
	}

	#[must_use]
	pub fn storage_key(&self) -> &str {
		&self.key
	}

	#[must_use]
	pub fn storage_location(&self) -> String {
		self.store.location()
	}

	/// Catalog entries matching the current input, flagged against the selection.
	#[must_use]
	pub fn matches(&self) -> Vec<OptionEntry> {
		self.catalog
			.filter(&self.input)
			.into_iter()
			.map(|name| OptionEntry {
				name: name.to_string(),
				already_added: self.selection.contains(name),
			})
			.collect()
	}

	/// Add `name` to the selection and clear the search text.
	///
	/// A name that is already selected leaves the list untouched. The list is
	/// persisted only when it changed.
	pub fn add(&mut self, name: &str) -> Result<bool, SelectionError> {
		self.input.clear();
		if !self.selection.add(name) {
			debug!(name, "already selected");
			return Ok(false);
		}
		info!(name, "country added");
		self.persist()?;
		Ok(true)
	}

	/// Remove `name` from the selection and persist the result.
	pub fn remove(&mut self, name: &str) -> Result<bool, SelectionError> {
		let removed = self.selection.remove(name);
		if removed {
			info!(name, "country removed");
		}
		self.persist()?;
		Ok(removed)
	}

	fn persist(&mut self) -> Result<(), SelectionError> {
		self.selection.save(self.store.as_mut(), &self.key)
	}

	#[must_use]
	pub fn outcome(&self) -> PickerOutcome {
		PickerOutcome {
			query: self.input.clone(),
			selection: self.selection.as_slice().to_vec(),
		}
	}
}
