//! Style ranges: a [`TextStyle`] pinned to a character interval.

use crate::color::Color;
use crate::style::{DecorationKind, FontStyle, TextStyle};

/// Errors raised when building or storing style ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleRangeError {
    /// A style range argument was required but absent.
    ///
    /// This is the invalid-argument error: `add` with no range reports it
    /// and leaves the set untouched.
    #[error("style range cannot be absent")]
    Missing,
    /// A range must cover at least one character.
    #[error("style range at {start} must cover at least one character")]
    EmptyRange { start: usize },
    /// `start + length` does not fit in a character offset.
    #[error("style range {start}+{length} overflows the character offset space")]
    Overflow { start: usize, length: usize },
}

/// Style overrides for the characters `[start, start + length)` of a label.
///
/// Offsets count `char`s, not bytes. A range may extend past the end of
/// the text; renderers clip it. Once built, the interval never changes;
/// the builder methods consume `self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStyleRange"))]
pub struct StyleRange {
    start: usize,
    length: usize,
    style: TextStyle,
}

impl StyleRange {
    /// Create an unstyled range over `length` characters starting at `start`.
    pub fn new(start: usize, length: usize) -> Result<Self, StyleRangeError> {
        Self::with_style(start, length, TextStyle::default())
    }

    /// Create a range carrying `style`.
    pub fn with_style(
        start: usize,
        length: usize,
        style: TextStyle,
    ) -> Result<Self, StyleRangeError> {
        if length == 0 {
            return Err(StyleRangeError::EmptyRange { start });
        }
        if start.checked_add(length).is_none() {
            return Err(StyleRangeError::Overflow { start, length });
        }
        Ok(Self {
            start,
            length,
            style,
        })
    }

    #[must_use]
    pub fn foreground(self, color: Color) -> Self {
        self.map_style(|s| s.foreground(color))
    }

    #[must_use]
    pub fn background(self, color: Color) -> Self {
        self.map_style(|s| s.background(color))
    }

    #[must_use]
    pub fn font_style(self, font_style: FontStyle) -> Self {
        self.map_style(|s| s.font_style(font_style))
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.map_style(TextStyle::bold)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.map_style(TextStyle::italic)
    }

    #[must_use]
    pub fn decorate(self, kind: DecorationKind, color: Option<Color>) -> Self {
        self.map_style(|s| s.decorate(kind, color))
    }

    fn map_style(mut self, f: impl FnOnce(TextStyle) -> TextStyle) -> Self {
        self.style = f(std::mem::take(&mut self.style));
        self
    }

    /// First covered character.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of covered characters (always > 0).
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// One past the last covered character.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[inline]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Check if both ranges cover exactly the same interval.
    #[inline]
    pub fn same_interval(&self, other: &StyleRange) -> bool {
        self.start == other.start && self.length == other.length
    }

    /// Check if the intervals share at least one character.
    #[inline]
    pub fn intersects(&self, other: &StyleRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStyleRange {
    start: usize,
    length: usize,
    #[serde(default)]
    style: TextStyle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStyleRange> for StyleRange {
    type Error = StyleRangeError;

    fn try_from(raw: RawStyleRange) -> Result<Self, Self::Error> {
        Self::with_style(raw.start, raw.length, raw.style)
    }
}
