//! Core crate exports for building and running the `country-picker` widget.
//!
//! The root module re-exports the catalog, selection, and UI types so that
//! embedders can wire up the picker without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod selection;
pub mod selector;
pub mod storage;
pub mod ui;

pub use catalog::{
	Catalog, CatalogError, CatalogSource, CatalogUpdate, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FileSource,
	HttpSource, spawn_catalog_fetch,
};
pub use selection::{DEFAULT_STORAGE_KEY, SelectionError, SelectionList};
pub use selector::{CatalogStatus, OptionEntry, PickerOutcome, SelectorState};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, Picker, UiLabels, run};
