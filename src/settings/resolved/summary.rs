use super::{CatalogLocation, ResolvedConfig, StorageLocation};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.catalog {
		CatalogLocation::Endpoint(url) => println!("  Catalog endpoint: {url}"),
		CatalogLocation::File(path) => println!("  Catalog file: {}", path.display()),
	}
	println!("  Request timeout: {}s", config.timeout.as_secs());
	match &config.storage {
		StorageLocation::File(path) => println!("  Storage file: {}", path.display()),
		StorageLocation::Memory => println!("  Storage file: (in memory)"),
	}
	println!("  Storage key: {}", config.storage_key);
	println!("  UI theme: {}", config.theme);
	println!("  Start open: {}", bool_to_word(config.start_open));
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Placeholder: {}", config.labels.placeholder);
	println!("  Log file: {}", bool_to_word(config.logging.enabled));
	if config.logging.enabled {
		println!("  Log level: {}", config.logging.level);
		println!("  Log directory: {}", config.logging.dir.display());
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
