use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["country-picker"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.ephemeral);
}

#[test]
fn repeated_config_flags_accumulate() {
	let parsed = CliArgs::try_parse_from([
		"country-picker",
		"-c",
		"a.toml",
		"--config",
		"b.toml",
		"--timeout",
		"3",
		"-o",
		"json",
	])
	.expect("parses");
	assert_eq!(parsed.config.len(), 2);
	assert_eq!(parsed.timeout_secs, Some(3));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn catalog_file_conflicts_with_endpoint() {
	let result = CliArgs::try_parse_from([
		"country-picker",
		"--endpoint",
		"https://example.com",
		"--catalog-file",
		"countries.json",
	]);
	assert!(result.is_err());
}
