use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `country-picker` binary.
#[derive(Parser, Debug)]
#[command(
	name = "country-picker",
	version,
	long_version = long_version(),
	about = "Search countries and keep a persistent list of the ones you pick",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COUNTRY_PICKER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "URL",
		help = "Fetch the country list from this URL (default: restcountries.com)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "catalog-file",
		value_name = "FILE",
		conflicts_with = "endpoint",
		help = "Read the country list from a saved response instead of the network (default: none)"
	)]
	pub(crate) catalog_file: Option<PathBuf>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Give up on the country list request after this many seconds (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "storage-file",
		value_name = "FILE",
		help = "Where the selection is stored (default: storage.json in the data directory)"
	)]
	pub(crate) storage_file: Option<PathBuf>,
	#[arg(
		long = "storage-key",
		value_name = "KEY",
		help = "Key the selection is stored under (default: list)"
	)]
	pub(crate) storage_key: Option<String>,
	#[arg(
		long,
		help = "Keep the selection in memory only (default: disabled)"
	)]
	pub(crate) ephemeral: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		help = "Start with the country list expanded (default: disabled)"
	)]
	pub(crate) open: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "no-log",
		help = "Disable the log file (default: disabled)"
	)]
	pub(crate) no_log: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
