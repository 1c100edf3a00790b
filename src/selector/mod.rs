//! Explicit state container for the picker widget.
//!
//! Everything the UI shows is derived from a [`SelectorState`]: the catalog
//! and its load status, the search text, whether the dropdown is open, and
//! the persisted selection list.

mod outcome;
mod state;

pub use outcome::PickerOutcome;
pub use state::{CatalogStatus, OptionEntry, SelectorState};
