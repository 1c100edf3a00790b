/// Text rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder shown in the empty search input.
	pub placeholder: String,
	/// Title of the dropdown panel.
	pub options_title: String,
	/// Title of the selected-countries panel.
	pub chips_title: String,
	/// Text of the add control.
	pub add_label: String,
	/// Suffix appended to options that are already selected.
	pub already_added_suffix: String,
	/// Shown when nothing matches the search text.
	pub no_matches: String,
	/// Shown while the catalog is being fetched.
	pub loading: String,
	/// Shown when the catalog could not be fetched.
	pub load_failed: String,
	/// Shown when the selection is empty.
	pub no_selection: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Search countries...".to_string(),
			options_title: "Countries".to_string(),
			chips_title: "Selected".to_string(),
			add_label: "Add".to_string(),
			already_added_suffix: "(already added)".to_string(),
			no_matches: "Could not find country".to_string(),
			loading: "Loading countries…".to_string(),
			load_failed: "Could not load countries".to_string(),
			no_selection: "No countries selected yet".to_string(),
		}
	}
}

impl UiLabels {
	/// Accessible label of the remove control for `name`.
	#[must_use]
	pub fn remove_label(&self, name: &str) -> String {
		format!("Remove {name}")
	}

	/// The add control as rendered, including its padding.
	#[must_use]
	pub fn add_button(&self) -> String {
		format!("[ {} ]", self.add_label)
	}
}
