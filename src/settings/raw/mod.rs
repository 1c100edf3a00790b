use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod catalog;
mod logging;
mod storage;
mod ui;

use catalog::CatalogSection;
use logging::LoggingSection;
use storage::StorageSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	storage: StorageSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.storage.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.catalog.endpoint.is_some(),
				"COUNTRY_PICKER__CATALOG__ENDPOINT",
				"--endpoint",
				"catalog.endpoint",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.catalog.timeout_secs.is_some(),
				"COUNTRY_PICKER__CATALOG__TIMEOUT_SECS",
				"--timeout",
				"catalog.timeout_secs",
			),
			storage_key: detect_source(
				cli.storage_key.is_some(),
				self.storage.key.is_some(),
				"COUNTRY_PICKER__STORAGE__KEY",
				"--storage-key",
				"storage.key",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"COUNTRY_PICKER__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"COUNTRY_PICKER__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let (catalog, timeout) = self.catalog.resolve();
		let (storage, storage_key) = self.storage.resolve()?;
		let ui = self.ui.finalize();
		let logging = self.logging.resolve()?;

		let config = ResolvedConfig {
			catalog,
			timeout,
			storage,
			storage_key,
			theme: ui.theme,
			initial_query: ui.initial_query,
			start_open: ui.start_open,
			labels: ui.labels,
			logging,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
