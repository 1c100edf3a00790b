use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeyValueStore, StorageError};

/// Key-value document stored as a JSON object at a fixed path.
///
/// The file is read on every lookup and rewritten through a temporary sibling
/// on every write, so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
	path: PathBuf,
}

type Document = BTreeMap<String, String>;

impl FileStorage {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: std::io::Error) -> StorageError {
		StorageError::Io {
			path: self.path.clone(),
			source,
		}
	}

	fn read_document(&self) -> Result<Document, StorageError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Document::new()),
			Err(err) => return Err(self.io_error(err)),
		};

		if contents.trim().is_empty() {
			return Ok(Document::new());
		}

		serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
			path: self.path.clone(),
			source,
		})
	}

	fn write_document(&self, document: &Document) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
		}

		let serialized = serde_json::to_string_pretty(document).map_err(|source| {
			StorageError::Corrupt {
				path: self.path.clone(),
				source,
			}
		})?;

		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, serialized).map_err(|err| self.io_error(err))?;
		fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))?;
		Ok(())
	}
}

impl KeyValueStore for FileStorage {
	fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.read_document()?.remove(key))
	}

	fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		let mut document = self.read_document()?;
		document.insert(key.to_string(), value.to_string());
		self.write_document(&document)?;
		debug!(path = %self.path.display(), key, "storage item written");
		Ok(())
	}

	fn location(&self) -> String {
		self.path.display().to_string()
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn missing_file_reads_as_empty() {
		let dir = tempdir().unwrap();
		let storage = FileStorage::new(dir.path().join("storage.json"));
		assert_eq!(storage.get_item("list").unwrap(), None);
	}

	#[test]
	fn values_survive_a_new_handle() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested/storage.json");

		let mut storage = FileStorage::new(&path);
		storage.set_item("list", r#"["Canada"]"#).unwrap();
		storage.set_item("other", "x").unwrap();

		let reopened = FileStorage::new(&path);
		assert_eq!(
			reopened.get_item("list").unwrap().as_deref(),
			Some(r#"["Canada"]"#)
		);
		assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("x"));
		assert!(!path.with_extension("json.tmp").exists());
	}

	#[test]
	fn overwriting_keeps_other_keys() {
		let dir = tempdir().unwrap();
		let mut storage = FileStorage::new(dir.path().join("storage.json"));
		storage.set_item("a", "1").unwrap();
		storage.set_item("b", "2").unwrap();
		storage.set_item("a", "3").unwrap();

		assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("3"));
		assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
	}

	#[test]
	fn non_object_document_is_corrupt() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("storage.json");
		fs::write(&path, "[1, 2, 3]").unwrap();

		let err = FileStorage::new(&path).get_item("list").unwrap_err();
		assert!(matches!(err, StorageError::Corrupt { .. }));
	}
}
