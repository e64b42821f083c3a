#![forbid(unsafe_code)]

//! The styled label widget core.
//!
//! [`StyledLabel`] composes the base label properties (text, icon,
//! alignment, maximum size) with a shared [`StyleRangeSet`], a
//! [`SelectionColorPolicy`] and [`LayoutConstraints`]. It does not paint:
//! a renderer reads [`StyledLabel::styled_runs`] and
//! [`StyledLabel::resolve_layout`] and draws the result.
//!
//! [`StyleRangeSet`]: styled_label_text::StyleRangeSet
//! [`SelectionColorPolicy`]: styled_label_text::SelectionColorPolicy
//! [`LayoutConstraints`]: styled_label_layout::LayoutConstraints

pub mod align;
pub mod config;
pub mod label;

pub use align::HorizontalAlignment;
pub use config::{ConfigIssue, LabelConfig};
pub use label::{Icon, StyledLabel};
