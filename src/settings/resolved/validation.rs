use country_picker::logging::is_valid_level;
use country_picker::ui::style;

use super::{CatalogLocation, ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let CatalogLocation::Endpoint(url) = &config.catalog
		&& !(url.starts_with("http://") || url.starts_with("https://"))
	{
		return Err(ConfigError::invalid(
			"catalog.endpoint",
			url.clone(),
			sources.source_for_endpoint(),
			"must be an http:// or https:// URL",
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"catalog.timeout_secs",
			config.timeout.as_secs().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.storage_key.trim().is_empty() {
		return Err(ConfigError::invalid(
			"storage.key",
			config.storage_key.clone(),
			sources.source_for_storage_key(),
			"must not be empty",
		));
	}

	if style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; available: {}", style::names().join(", ")),
		));
	}

	if !is_valid_level(&config.logging.level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.logging.level.clone(),
			sources.source_for_log_level(),
			"expected one of trace, debug, info, warn, error, off",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::super::{SettingSource, sample_config};
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&sample_config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Duration::ZERO,
			..sample_config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "catalog.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag `--timeout`"));
	}

	#[test]
	fn validation_rejects_blank_storage_key() {
		let config = ResolvedConfig {
			storage_key: "  ".into(),
			..sample_config()
		};
		let sources = ConfigSources {
			storage_key: Some(SettingSource::Environment("COUNTRY_PICKER__STORAGE__KEY")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "storage.key");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: "neon".into(),
			..sample_config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("slate"));
	}

	#[test]
	fn validation_rejects_non_http_endpoint() {
		let config = ResolvedConfig {
			catalog: CatalogLocation::Endpoint("ftp://example.com/countries".into()),
			..sample_config()
		};
		let sources = ConfigSources {
			endpoint: Some(SettingSource::ConfigKey("catalog.endpoint")),
			..ConfigSources::default()
		};
		let err = validate(&config, &sources).unwrap_err();
		assert!(err.to_string().contains("configuration key `catalog.endpoint`"));
	}

	#[test]
	fn catalog_file_skips_endpoint_check() {
		let config = ResolvedConfig {
			catalog: CatalogLocation::File("countries.json".into()),
			..sample_config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let mut config = sample_config();
		config.logging.level = "loud".into();
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert!(err.to_string().contains("built-in default"));
	}
}
