use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::{info, warn};

use super::{Catalog, CatalogError, CatalogSource};

/// Result of the one-shot catalog fetch, delivered to the UI thread.
#[derive(Debug)]
pub enum CatalogUpdate {
	Loaded(Catalog),
	Failed(CatalogError),
}

impl CatalogUpdate {
	fn from_result(result: Result<Catalog, CatalogError>) -> Self {
		match result {
			Ok(catalog) => Self::Loaded(catalog),
			Err(err) => Self::Failed(err),
		}
	}
}

/// Load the catalog on a worker thread.
///
/// The receiver yields exactly one [`CatalogUpdate`] and then disconnects.
/// There is no retry and no cancellation.
pub fn spawn_catalog_fetch<S>(source: S) -> Receiver<CatalogUpdate>
where
	S: CatalogSource,
{
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let origin = source.describe();
		let result = source.load();
		match &result {
			Ok(catalog) => info!(%origin, count = catalog.len(), "catalog loaded"),
			Err(err) => warn!(%origin, error = %err, "catalog fetch failed"),
		}
		// The UI may already have exited.
		let _ = tx.send(CatalogUpdate::from_result(result));
	});

	rx
}
