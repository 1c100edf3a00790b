use std::path::PathBuf;

use anyhow::{Context, Result};
use country_picker::{DEFAULT_STORAGE_KEY, app_dirs};
use serde::Deserialize;

use super::super::resolved::StorageLocation;
use crate::cli::CliArgs;

/// Where the selection lives between runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) file: Option<PathBuf>,
	pub(super) key: Option<String>,
	pub(super) ephemeral: Option<bool>,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.storage_file.clone() {
			self.file = Some(file);
		}
		if let Some(key) = cli.storage_key.clone() {
			self.key = Some(key);
		}
		if cli.ephemeral {
			self.ephemeral = Some(true);
		}
	}

	pub(super) fn resolve(self) -> Result<(StorageLocation, String)> {
		let key = self.key.unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
		if self.ephemeral.unwrap_or(false) {
			return Ok((StorageLocation::Memory, key));
		}

		let file = match self.file {
			Some(file) => file,
			None => app_dirs::default_storage_file()
				.context("failed to determine the default storage file")?,
		};
		Ok((StorageLocation::File(file), key))
	}
}
