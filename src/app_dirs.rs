//! Resolve configuration and data directories for `country-picker`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "country-picker";
const APPLICATION: &str = "country-picker";

pub const CONFIG_DIR_ENV: &str = "COUNTRY_PICKER_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "COUNTRY_PICKER_DATA_DIR";

/// File name of the key-value document holding the persisted selection.
pub const STORAGE_FILE_NAME: &str = "storage.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for country-picker"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to look up `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the selection document and logs.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default location of the storage document.
pub fn default_storage_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(STORAGE_FILE_NAME))
}

/// Default directory for rolling log files.
pub fn default_log_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join("logs"))
}
