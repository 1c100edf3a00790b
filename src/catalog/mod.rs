//! The list of country names offered by the picker.
//!
//! A [`Catalog`] is fetched once per session from a [`CatalogSource`] and is
//! immutable afterwards. Filtering is a case-insensitive substring match that
//! keeps the source order.

mod fetch;
mod source;

use thiserror::Error;

pub use fetch::{CatalogUpdate, spawn_catalog_fetch};
pub use source::{
	CatalogSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FileSource, HttpSource, parse_records,
};

/// Errors raised while obtaining the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("request to {url} failed: {source}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{url} responded with HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("failed to read catalog file {path}: {source}")]
	Read {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to decode catalog payload: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Country display names in the order the source returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	names: Vec<String>,
}

impl Catalog {
	#[must_use]
	pub fn new(names: Vec<String>) -> Self {
		Self { names }
	}

	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(names.into_iter().map(Into::into).collect())
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Return every entry containing `query`, ignoring case.
	///
	/// An empty query yields the whole catalog.
	pub fn filter<'a>(&'a self, query: &str) -> Vec<&'a str> {
		let needle = query.to_lowercase();
		self.names
			.iter()
			.map(String::as_str)
			.filter(|name| matches_query(name, &needle))
			.collect()
	}
}

/// Case-insensitive substring test against an already lower-cased needle.
fn matches_query(name: &str, needle: &str) -> bool {
	needle.is_empty() || name.to_lowercase().contains(needle)
}
