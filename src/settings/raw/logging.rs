use std::path::PathBuf;

use anyhow::{Context, Result};
use country_picker::app_dirs;
use country_picker::logging::LogOptions;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Log file settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
	pub(super) dir: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_log {
			self.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn resolve(self) -> Result<LogOptions> {
		let dir = match self.dir {
			Some(dir) => dir,
			None => app_dirs::default_log_dir().context("failed to determine the log directory")?,
		};
		let mut options = LogOptions::new(dir);
		if let Some(enabled) = self.enabled {
			options.enabled = enabled;
		}
		if let Some(level) = self.level {
			options.level = level.trim().to_ascii_lowercase();
		}
		Ok(options)
	}
}
