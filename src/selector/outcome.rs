use serde::Serialize;

/// What the picker hands back when the user leaves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
	/// Search text at exit.
	pub query: String,
	/// Selection list at exit, in insertion order.
	pub selection: Vec<String>,
}
