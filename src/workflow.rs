use anyhow::{Context, Result};
use country_picker::logging::{self, LogGuard};
use country_picker::{
	FileSource, FileStorage, HttpSource, KeyValueStore, MemoryStorage, Picker, PickerOutcome,
	SelectorState,
};
use tracing::info;

use crate::settings::{CatalogLocation, ResolvedConfig, StorageLocation};

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker: Picker,
	_log_guard: LogGuard,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let log_guard = logging::initialize(&config.logging)?;
		let picker = PickerFactory::build(config)?;
		Ok(Self {
			picker,
			_log_guard: log_guard,
		})
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		let outcome = self.picker.run()?;
		info!(selected = outcome.selection.len(), "picker finished");
		Ok(outcome)
	}
}

/// Helper for translating resolved configuration into a configured [`Picker`].
struct PickerFactory {
	picker: Picker,
}

impl PickerFactory {
	fn build(config: ResolvedConfig) -> Result<Picker> {
		let ResolvedConfig {
			catalog,
			timeout,
			storage,
			storage_key,
			theme,
			initial_query,
			start_open,
			labels,
			logging: _,
		} = config;

		let builder = Self::new(storage, storage_key)?
			.with_catalog(catalog, timeout)
			.with_theme(&theme)?
			.with_initial_query(initial_query)
			.start_open(start_open)
			.with_labels(labels);

		Ok(builder.finish())
	}

	fn new(storage: StorageLocation, key: String) -> Result<Self> {
		let store: Box<dyn KeyValueStore> = match storage {
			StorageLocation::File(path) => Box::new(FileStorage::new(path)),
			StorageLocation::Memory => Box::new(MemoryStorage::new()),
		};
		let location = store.location();
		let state = SelectorState::new(store, key)
			.with_context(|| format!("failed to restore the selection from {location}"))?;
		Ok(Self {
			picker: Picker::new(state),
		})
	}

	fn with_catalog(mut self, catalog: CatalogLocation, timeout: std::time::Duration) -> Self {
		self.picker = match catalog {
			CatalogLocation::Endpoint(url) => self.picker.with_source(HttpSource::new(url, timeout)),
			CatalogLocation::File(path) => self.picker.with_source(FileSource::new(path)),
		};
		self
	}

	fn with_theme(mut self, theme: &str) -> Result<Self> {
		self.picker = self.picker.with_theme_name(theme)?;
		Ok(self)
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.picker = self.picker.with_initial_query(query);
		}
		self
	}

	fn start_open(mut self, open: bool) -> Self {
		self.picker = self.picker.start_open(open);
		self
	}

	fn with_labels(mut self, labels: country_picker::UiLabels) -> Self {
		self.picker = self.picker.with_labels(labels);
		self
	}

	fn finish(self) -> Picker {
		self.picker
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	fn config_for(storage: StorageLocation) -> ResolvedConfig {
		let dir = std::env::temp_dir().join("country-picker-workflow-tests");
		let mut logging = country_picker::logging::LogOptions::new(dir);
		logging.enabled = false;
		ResolvedConfig {
			catalog: CatalogLocation::File("countries.json".into()),
			timeout: country_picker::DEFAULT_TIMEOUT,
			storage,
			storage_key: "list".into(),
			theme: "light".into(),
			initial_query: "ca".into(),
			start_open: false,
			labels: country_picker::UiLabels::default(),
			logging,
		}
	}

	#[test]
	fn workflow_restores_stored_selection() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("storage.json");
		fs::write(&path, r#"{"list":"[\"Canada\"]"}"#).unwrap();

		let picker = PickerFactory::build(config_for(StorageLocation::File(path))).unwrap();
		let app = picker.into_app();
		assert_eq!(app.state.selection().as_slice(), ["Canada"]);
		assert_eq!(app.query_input.text(), "ca");
		assert!(app.state.is_open());
	}

	#[test]
	fn malformed_storage_is_a_startup_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("storage.json");
		fs::write(&path, r#"{"list":"not json"}"#).unwrap();

		let err = PickerFactory::build(config_for(StorageLocation::File(path.clone())))
			.err()
			.expect("malformed storage");
		let message = format!("{err:#}");
		assert!(message.contains(&path.display().to_string()), "{message}");
		assert!(message.contains("`list`"), "{message}");
	}

	#[test]
	fn memory_storage_needs_no_files() {
		let picker = PickerFactory::build(config_for(StorageLocation::Memory)).unwrap();
		assert!(picker.into_app().state.selection().is_empty());
	}
}
