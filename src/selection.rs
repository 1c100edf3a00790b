//! The user's chosen countries.
//!
//! A [`SelectionList`] is ordered by insertion and never holds the same name
//! twice. It is persisted as a JSON array of strings under a single storage
//! key.

use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key the selection is written under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "list";

#[derive(Debug, Error)]
pub enum SelectionError {
	#[error(transparent)]
	Storage(#[from] StorageError),
	#[error("stored value for `{key}` is not a JSON array of strings: {source}")]
	Malformed {
		key: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to encode the selection for `{key}`: {source}")]
	Encode {
		key: String,
		#[source]
		source: serde_json::Error,
	},
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
	items: Vec<String>,
}

impl SelectionList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a list from arbitrary names, keeping the first occurrence of each.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list = Self::new();
		for name in names {
			list.add(name);
		}
		list
	}

	/// Append `name` unless it is already present. Returns whether it was added.
	pub fn add(&mut self, name: impl Into<String>) -> bool {
		let name = name.into();
		if self.contains(&name) {
			return false;
		}
		self.items.push(name);
		true
	}

	/// Drop `name` from the list. Returns whether anything was removed.
	pub fn remove(&mut self, name: &str) -> bool {
		let before = self.items.len();
		self.items.retain(|item| item != name);
		self.items.len() != before
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.items.iter().any(|item| item == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(String::as_str)
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<String> {
		self.items
	}

	/// Read the list stored under `key`; an absent key yields an empty list.
	pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self, SelectionError> {
		let Some(raw) = store.get_item(key)? else {
			return Ok(Self::new());
		};

		let names: Vec<String> =
			serde_json::from_str(&raw).map_err(|source| SelectionError::Malformed {
				key: key.to_string(),
				source,
			})?;
		Ok(Self::from_names(names))
	}

	/// Overwrite the value under `key` with this list.
	pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), SelectionError> {
		let serialized =
			serde_json::to_string(&self.items).map_err(|source| SelectionError::Encode {
				key: key.to_string(),
				source,
			})?;
		store.set_item(key, &serialized)?;
		Ok(())
	}
}

impl<'a> IntoIterator for &'a SelectionList {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStorage;

	#[test]
	fn adding_a_present_name_keeps_length() {
		let mut list = SelectionList::from_names(["Canada"]);
		assert!(!list.add("Canada"));
		assert_eq!(list.len(), 1);
	}

	#[test]
	fn removing_an_absent_name_is_a_no_op() {
		let mut list = SelectionList::from_names(["Canada", "Mexico"]);
		let before = list.clone();
		assert!(!list.remove("Peru"));
		assert_eq!(list, before);
	}

	#[test]
	fn add_then_remove_restores_previous_state() {
		let mut list = SelectionList::from_names(["Canada"]);
		let before = list.clone();
		assert!(list.add("Mexico"));
		assert!(list.remove("Mexico"));
		assert_eq!(list, before);
	}

	#[test]
	fn insertion_order_is_kept() {
		let mut list = SelectionList::new();
		list.add("Mexico");
		list.add("Canada");
		list.add("Mexico");
		assert_eq!(list.as_slice(), ["Mexico", "Canada"]);
	}

	#[test]
	fn absent_key_loads_empty_list() {
		let store = MemoryStorage::new();
		let list = SelectionList::load(&store, DEFAULT_STORAGE_KEY).unwrap();
		assert!(list.is_empty());
	}

	#[test]
	fn stored_duplicates_collapse_on_load() {
		let store = MemoryStorage::new().with_item("list", r#"["Canada","Canada","Peru"]"#);
		let list = SelectionList::load(&store, "list").unwrap();
		assert_eq!(list.as_slice(), ["Canada", "Peru"]);
	}

	#[test]
	fn malformed_value_names_the_key() {
		let store = MemoryStorage::new().with_item("list", "{not json");
		let err = SelectionList::load(&store, "list").unwrap_err();
		assert!(matches!(err, SelectionError::Malformed { .. }));
		assert!(err.to_string().contains("`list`"));
	}

	#[test]
	fn save_writes_a_json_array() {
		let mut store = MemoryStorage::new();
		let list = SelectionList::from_names(["Canada", "Mexico"]);
		list.save(&mut store, "list").unwrap();
		assert_eq!(
			store.get_item("list").unwrap().as_deref(),
			Some(r#"["Canada","Mexico"]"#)
		);
	}

	#[test]
	fn encode_failure_is_not_reported_as_malformed_storage() {
		let source = serde_json::from_str::<Vec<String>>("x").unwrap_err();
		let err = SelectionError::Encode {
			key: "list".into(),
			source,
		};
		let message = err.to_string();
		assert!(message.starts_with("failed to encode the selection for `list`"));
		assert!(!message.contains("stored value"));
	}
}
