//! Widgets making up the picker screen.

/// Selected countries with their remove controls.
pub mod chips;
/// Matched-substring highlighting.
pub mod highlight;
/// Dropdown rows and status lines.
pub mod options;
/// Search input, toggle, and loading indicator.
pub mod prompt;
pub mod scrollbar;

pub use chips::{ChipsContext, REMOVE_GLYPH, REMOVE_WIDTH, render_chips};
pub use highlight::{highlight_spans, match_range};
pub use options::{OptionsContext, add_button_width, options_height, render_options};
pub use prompt::{LoadingState, PromptAreas, PromptContext, render_prompt, toggle_glyph};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
