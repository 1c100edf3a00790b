//! File-backed tracing setup.
//!
//! The terminal belongs to the picker while it runs, so diagnostics go to a
//! daily rolling file instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{Directive, EnvFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "COUNTRY_PICKER_LOG";

/// Prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "country-picker.log";

/// Logging options resolved from configuration.
#[derive(Debug, Clone)]
pub struct LogOptions {
	pub enabled: bool,
	pub level: String,
	pub dir: PathBuf,
}

impl LogOptions {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self {
			enabled: true,
			level: "info".to_string(),
			dir: dir.into(),
		}
	}
}

/// Keeps the background log writer alive; dropping it flushes pending lines.
pub struct LogGuard {
	_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// `COUNTRY_PICKER_LOG` takes precedence over the configured level when set.
pub fn initialize(options: &LogOptions) -> Result<LogGuard> {
	if !options.enabled {
		return Ok(LogGuard { _guard: None });
	}

	fs::create_dir_all(&options.dir)
		.with_context(|| format!("failed to create log directory {}", options.dir.display()))?;

	let filter = build_filter(&options.level)?;
	let (writer, guard) = non_blocking_appender(&options.dir);

	let installed = tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_ansi(false)
				.with_filter(filter),
		)
		.try_init();

	if installed.is_err() {
		// A subscriber is already active (tests, embedders); keep theirs.
		return Ok(LogGuard { _guard: None });
	}

	Ok(LogGuard {
		_guard: Some(guard),
	})
}

fn non_blocking_appender(dir: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
	let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
	tracing_appender::non_blocking(appender)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
	if std::env::var_os(LOG_ENV).is_some() {
		return Ok(EnvFilter::from_env(LOG_ENV));
	}

	let directive: Directive = level
		.trim()
		.parse()
		.with_context(|| format!("invalid log level `{level}`"))?;
	Ok(EnvFilter::default().add_directive(directive))
}

/// Return whether `level` is accepted as a log level directive.
pub fn is_valid_level(level: &str) -> bool {
	matches!(
		level.trim().to_ascii_lowercase().as_str(),
		"trace" | "debug" | "info" | "warn" | "error" | "off"
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_levels_are_accepted() {
		for level in ["trace", "DEBUG", " info ", "warn", "error", "off"] {
			assert!(is_valid_level(level), "{level} should be valid");
		}
		assert!(!is_valid_level("loud"));
	}

	#[test]
	fn disabled_logging_installs_nothing() {
		let mut options = LogOptions::new("/nonexistent/country-picker-logs");
		options.enabled = false;
		let guard = initialize(&options).expect("disabled logging never fails");
		assert!(guard._guard.is_none());
	}
}
