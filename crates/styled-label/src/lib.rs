#![forbid(unsafe_code)]

//! Styled label public facade.
//!
//! Re-exports the types most applications need from the internal crates
//! and offers a prelude, a crate-level [`Error`], and
//! [`logging::init_from_env`].
//!
//! # Example
//! ```
//! use styled_label::prelude::*;
//!
//! fn build() -> Result<StyledLabel> {
//!     let label = StyledLabel::with_text("Status: online");
//!     label.add_style_range(StyleRange::new(8, 6)?.foreground(Color::GREEN).bold())?;
//!     Ok(label)
//! }
//!
//! let label = build().unwrap();
//! assert_eq!(label.style_ranges().len(), 1);
//! ```

pub mod logging;

// --- Re-exports -------------------------------------------------------------

pub use styled_label_core::{ChangeListeners, ListenerId, Size};
pub use styled_label_layout::{
    ConstraintWarning, LayoutConstraintResolver, LayoutConstraints, LayoutResolution,
    SizingBasis,
};
pub use styled_label_style::{
    Color, DecorationKind, FontStyle, LineDecoration, StyleRange, StyleRangeError, TextStyle,
};
pub use styled_label_text::{
    CellMetrics, LineSpan, PROPERTY_IGNORE_COLOR_SETTINGS, PROPERTY_STYLE_RANGE, PropertyChange,
    PropertyValue, SelectionColorPolicy, StyleRangeSet, StyledRun, TextMetrics, WrapMode,
    resolve_runs, runs_in_line, wrap_lines,
};
pub use styled_label_widgets::{ConfigIssue, HorizontalAlignment, Icon, LabelConfig, StyledLabel};

// --- Errors -----------------------------------------------------------------

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style range was missing or malformed.
    #[error(transparent)]
    StyleRange(#[from] StyleRangeError),
    /// A global tracing subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Standard result type for styled-label APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellMetrics, Color, DecorationKind, Error, FontStyle, HorizontalAlignment, Icon,
        LabelConfig, LayoutConstraints, Result, Size, StyleRange, StyledLabel, TextMetrics,
        TextStyle, WrapMode,
    };

    pub use crate::{core, layout, style, text, widgets};
}

pub use styled_label_core as core;
pub use styled_label_layout as layout;
pub use styled_label_style as style;
pub use styled_label_text as text;
pub use styled_label_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_range_errors_convert() {
        let err: Error = StyleRange::new(3, 0).unwrap_err().into();
        assert!(matches!(
            err,
            Error::StyleRange(StyleRangeError::EmptyRange { start: 3 })
        ));
    }

    #[test]
    fn missing_range_converts() {
        let label = StyledLabel::new();
        let result: Result<()> = label.add_style_range(None).map_err(Error::from);
        assert!(matches!(result, Err(Error::StyleRange(StyleRangeError::Missing))));
    }
}
