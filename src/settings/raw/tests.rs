use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::super::resolved::{CatalogLocation, StorageLocation};
use super::{RawConfig, SettingSource, detect_source};
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("country-picker").chain(args.iter().copied()))
}

fn parse(toml: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap()
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--endpoint",
		"https://example.com/all",
		"--timeout",
		"3",
		"--storage-file",
		"/tmp/picker.json",
		"--storage-key",
		"favourites",
		"--theme",
		"light",
		"--query",
		"can",
		"--open",
		"--log-level",
		"debug",
	]);

	let mut config = parse("[catalog]\nfile = \"countries.json\"\ntimeout_secs = 30\n\n[ui]\ntheme = \"solarized\"\n");
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalog.endpoint, cli.endpoint);
	assert!(config.catalog.file.is_none());
	assert_eq!(config.catalog.timeout_secs, Some(3));
	assert_eq!(config.storage.file, cli.storage_file);
	assert_eq!(config.storage.key, cli.storage_key);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.open, Some(true));
	assert_eq!(config.logging.level, cli.log_level);
}

#[test]
fn file_settings_resolve_without_cli() {
	let config = parse(
		r#"
[catalog]
file = "countries.json"
timeout_secs = 4

[storage]
file = "/tmp/picker.json"
key = "favourites"

[ui]
theme = "Solarized"
open = true

[ui.labels]
no_matches = "Nothing here"

[logging]
enabled = false
dir = "/tmp/picker-logs"
"#,
	);

	let resolved = config.resolve(&cli(&[])).unwrap();
	assert_eq!(resolved.catalog, CatalogLocation::File(PathBuf::from("countries.json")));
	assert_eq!(resolved.timeout, Duration::from_secs(4));
	assert_eq!(resolved.storage, StorageLocation::File(PathBuf::from("/tmp/picker.json")));
	assert_eq!(resolved.storage_key, "favourites");
	assert_eq!(resolved.theme, "Solarized");
	assert!(resolved.start_open);
	assert_eq!(resolved.labels.no_matches, "Nothing here");
	assert!(!resolved.logging.enabled);
}

#[test]
fn ephemeral_flag_keeps_selection_in_memory() {
	let cli = cli(&["--ephemeral", "--no-log"]);
	let mut config = parse("[storage]\nfile = \"/tmp/picker.json\"\n\n[logging]\ndir = \"/tmp/picker-logs\"\n");
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.storage, StorageLocation::Memory);
	assert_eq!(resolved.storage_key, "list");
	assert!(!resolved.logging.enabled);
}

#[test]
fn invalid_values_name_their_origin() {
	let cli = cli(&["--timeout", "0"]);
	let mut config = parse("[storage]\nephemeral = true\n\n[logging]\ndir = \"/tmp/picker-logs\"\n");
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("CLI flag `--timeout`"), "{err}");
}

#[test]
fn detect_source_prefers_cli() {
	assert_eq!(
		detect_source(true, true, "COUNTRY_PICKER__TEST__UNSET", "--flag", "section.key"),
		Some(SettingSource::CliFlag("--flag"))
	);
	assert_eq!(
		detect_source(false, true, "COUNTRY_PICKER__TEST__UNSET", "--flag", "section.key"),
		Some(SettingSource::ConfigKey("section.key"))
	);
	assert_eq!(detect_source(false, false, "X", "--flag", "section.key"), None);
}
