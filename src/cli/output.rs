use anyhow::Result;
use country_picker::PickerOutcome;
use serde_json::json;

/// Print the selection, one country per line.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	for name in &outcome.selection {
		println!("{name}");
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
