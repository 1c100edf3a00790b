use std::path::PathBuf;
use std::time::Duration;

use country_picker::UiLabels;
use country_picker::logging::LogOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the catalog is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
	Endpoint(String),
	File(PathBuf),
}

/// Where the selection is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
	File(PathBuf),
	Memory,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog: CatalogLocation,
	pub timeout: Duration,
	pub storage: StorageLocation,
	pub storage_key: String,
	pub theme: String,
	pub initial_query: String,
	pub start_open: bool,
	pub labels: UiLabels,
	pub logging: LogOptions,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		catalog: CatalogLocation::Endpoint(country_picker::DEFAULT_ENDPOINT.into()),
		timeout: country_picker::DEFAULT_TIMEOUT,
		storage: StorageLocation::File(PathBuf::from("/tmp/storage.json")),
		storage_key: "list".into(),
		theme: "slate".into(),
		initial_query: String::new(),
		start_open: false,
		labels: UiLabels::default(),
		logging: LogOptions::new("/tmp/logs"),
	}
}
