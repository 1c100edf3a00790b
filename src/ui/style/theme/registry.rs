use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

fn answers_to(definition: &ThemeDefinition, normalized: &str) -> bool {
	normalize_name(definition.name) == normalized
		|| definition
			.aliases
			.iter()
			.any(|alias| normalize_name(alias) == normalized)
}

/// Look up a built-in theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| answers_to(definition, &normalized))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}
