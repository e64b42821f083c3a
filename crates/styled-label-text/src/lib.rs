#![forbid(unsafe_code)]

//! Text handling for styled labels.
//!
//! This crate owns the parts of a styled label that deal with text:
//! - [`StyleRangeSet`] - thread-safe storage for style ranges
//! - [`SelectionColorPolicy`] - the "ignore color settings" flag
//! - [`PropertyChange`] - change events emitted by both of the above
//! - [`TextMetrics`] / [`CellMetrics`] - text measurement capability
//! - [`wrap_lines`] - grapheme-safe wrapping into [`LineSpan`]s
//! - [`resolve_runs`] - flatten style ranges into non-overlapping [`StyledRun`]s
//!
//! # Example
//! ```
//! use styled_label_style::{Color, StyleRange};
//! use styled_label_text::{CellMetrics, StyleRangeSet, WrapMode, resolve_runs, wrap_lines};
//!
//! let set = StyleRangeSet::new();
//! set.add(StyleRange::new(0, 5).unwrap().foreground(Color::RED)).unwrap();
//! set.add(StyleRange::new(0, 5).unwrap().foreground(Color::GREEN)).unwrap();
//! assert_eq!(set.len(), 1);
//!
//! let text = "Hello styled world";
//! let lines = wrap_lines(text, Some(12), WrapMode::WordChar, &CellMetrics::TERMINAL);
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].slice(text), "Hello styled");
//!
//! let runs = resolve_runs(text.chars().count(), &set.snapshot(), false);
//! assert_eq!(runs[0].end, 5);
//! ```

pub mod event;
pub mod metrics;
pub mod range_set;
pub mod runs;
pub mod selection;
pub mod wrap;

pub use event::{
    PROPERTY_IGNORE_COLOR_SETTINGS, PROPERTY_STYLE_RANGE, PropertyChange, PropertyValue,
};
pub use metrics::{CellMetrics, TextMetrics, display_width};
pub use range_set::StyleRangeSet;
pub use runs::{StyledRun, resolve_runs, runs_in_line};
pub use selection::SelectionColorPolicy;
pub use wrap::{LineSpan, WrapMode, wrap_lines};

/// Listener list type shared by the range set, the selection policy and the label.
pub type PropertyListeners = styled_label_core::ChangeListeners<PropertyChange>;
