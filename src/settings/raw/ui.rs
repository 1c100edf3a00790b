use country_picker::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) open: Option<bool>,
	pub(super) labels: LabelsSection,
}

/// Overrides for the text rendered around the picker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LabelsSection {
	pub(super) placeholder: Option<String>,
	pub(super) options_title: Option<String>,
	pub(super) chips_title: Option<String>,
	pub(super) add: Option<String>,
	pub(super) already_added: Option<String>,
	pub(super) no_matches: Option<String>,
	pub(super) loading: Option<String>,
	pub(super) load_failed: Option<String>,
	pub(super) no_selection: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) initial_query: String,
	pub(super) start_open: bool,
	pub(super) labels: UiLabels,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if cli.open {
			self.open = Some(true);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let theme = self
			.theme
			.map(|theme| theme.trim().to_string())
			.filter(|theme| !theme.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		UiResolution {
			theme,
			initial_query: self.initial_query.unwrap_or_default(),
			start_open: self.open.unwrap_or(false),
			labels: self.labels.apply(UiLabels::default()),
		}
	}
}

impl LabelsSection {
	fn apply(self, mut labels: UiLabels) -> UiLabels {
		let overrides = [
			(self.placeholder, &mut labels.placeholder),
			(self.options_title, &mut labels.options_title),
			(self.chips_title, &mut labels.chips_title),
			(self.add, &mut labels.add_label),
			(self.already_added, &mut labels.already_added_suffix),
			(self.no_matches, &mut labels.no_matches),
			(self.loading, &mut labels.loading),
			(self.load_failed, &mut labels.load_failed),
			(self.no_selection, &mut labels.no_selection),
		];
		for (value, target) in overrides {
			if let Some(value) = value {
				*target = value;
			}
		}
		labels
	}
}
