use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// Process-local store; nothing outlives the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
	items: HashMap<String, String>,
}

impl MemoryStorage {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a value before handing the store to a consumer.
	#[must_use]
	pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.insert(key.into(), value.into());
		self
	}
}

impl KeyValueStore for MemoryStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.items.get(key).cloned())
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.items.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn location(&self) -> String {
		"memory".to_string()
	}
}
