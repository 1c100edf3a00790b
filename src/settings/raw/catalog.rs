use std::path::PathBuf;
use std::time::Duration;

use country_picker::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use serde::Deserialize;

use super::super::resolved::CatalogLocation;
use crate::cli::CliArgs;

/// Where and how the country list is fetched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) endpoint: Option<String>,
	pub(super) file: Option<PathBuf>,
	pub(super) timeout_secs: Option<u64>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.endpoint = Some(endpoint);
			self.file = None;
		}
		if let Some(file) = cli.catalog_file.clone() {
			self.file = Some(file);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.timeout_secs = Some(timeout);
		}
	}

	/// A configured file wins over an endpoint.
	pub(super) fn resolve(self) -> (CatalogLocation, Duration) {
		let location = match (self.file, self.endpoint) {
			(Some(file), _) => CatalogLocation::File(file),
			(None, Some(endpoint)) => CatalogLocation::Endpoint(endpoint.trim().to_string()),
			(None, None) => CatalogLocation::Endpoint(DEFAULT_ENDPOINT.to_string()),
		};
		let timeout = self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs);
		(location, timeout)
	}
}
