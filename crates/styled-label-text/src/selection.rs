#![forbid(unsafe_code)]

//! Color handling while a label is selected.
//!
//! A label inside a list or table cell is often drawn on a selection
//! background. When the policy is set to ignore color settings, colors from
//! style ranges are suppressed and the label uses the host's selection
//! foreground instead; font emphasis and decorations are still applied.

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use styled_label_style::{Color, TextStyle};
use tracing::debug;

use crate::PropertyListeners;
use crate::event::PropertyChange;

/// The "ignore color settings" flag plus its change notifications.
#[derive(Debug)]
pub struct SelectionColorPolicy {
    ignore: AtomicBool,
    listeners: Arc<PropertyListeners>,
}

impl SelectionColorPolicy {
    /// Policy that honours range colors, with its own listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_listeners(Arc::new(PropertyListeners::new()))
    }

    /// Policy that honours range colors and reports to `listeners`.
    #[must_use]
    pub fn with_listeners(listeners: Arc<PropertyListeners>) -> Self {
        Self {
            ignore: AtomicBool::new(false),
            listeners,
        }
    }

    pub fn listeners(&self) -> &Arc<PropertyListeners> {
        &self.listeners
    }

    /// Whether range colors are currently ignored.
    pub fn is_ignoring(&self) -> bool {
        self.ignore.load(Ordering::Acquire)
    }

    /// Set the flag. Notifies only when the value actually changes.
    ///
    /// Returns the previous value.
    pub fn set_ignoring(&self, ignore: bool) -> bool {
        let old = self.ignore.swap(ignore, Ordering::AcqRel);
        if old != ignore {
            debug!(old, new = ignore, "ignore color settings toggled");
            self.listeners
                .emit(&PropertyChange::ignore_color_settings(old, ignore));
        }
        old
    }

    /// The style to draw a range with under the current policy.
    ///
    /// Borrowed when colors are honoured; a color-free copy otherwise.
    pub fn effective_style<'a>(&self, style: &'a TextStyle) -> Cow<'a, TextStyle> {
        if self.is_ignoring() && style.has_colors() {
            Cow::Owned(style.without_colors())
        } else {
            Cow::Borrowed(style)
        }
    }

    /// Foreground for a run: the range color if honoured, else `fallback`.
    ///
    /// `fallback` is the label foreground, or the selection foreground while
    /// the label is being drawn as selected.
    pub fn foreground_for(&self, style: Option<&TextStyle>, fallback: Color) -> Color {
        if self.is_ignoring() {
            return fallback;
        }
        style
            .and_then(TextStyle::foreground_color)
            .unwrap_or(fallback)
    }
}

impl Default for SelectionColorPolicy {
    fn default() -> Self {
        Self::new()
    }
}
