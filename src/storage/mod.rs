//! String key-value persistence, shaped like browser local storage.
//!
//! Values are opaque text; callers decide how to serialize. [`FileStorage`]
//! keeps every key in one JSON document on disk, [`MemoryStorage`] keeps them
//! in process memory.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("failed to access storage file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("storage file {path} is not a JSON object of strings: {source}")]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Synchronous, single-writer key-value store.
pub trait KeyValueStore: Send {
	/// Return the value stored under `key`, if any.
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Overwrite the value stored under `key`.
	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Short description of where values live, for summaries and logs.
	fn location(&self) -> String;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).get_item(key)
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set_item(key, value)
	}

	fn location(&self) -> String {
		(**self).location()
	}
}
