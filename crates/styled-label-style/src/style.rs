//! Font emphasis, line decorations, and the combined [`TextStyle`].

use crate::color::Color;
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Font emphasis bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FontStyle: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const SUPERSCRIPT = 1 << 2;
        const SUBSCRIPT = 1 << 3;
    }
}

impl FontStyle {
    /// Plain text (no emphasis).
    pub const PLAIN: Self = Self::empty();

    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    #[must_use]
    pub const fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }
}

/// Kind of line drawn over, under, or through text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DecorationKind {
    Underline,
    Strikethrough,
    DoubleStrikethrough,
    Wave,
}

/// A line decoration with its own optional color.
///
/// A `None` color means the renderer uses the text foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDecoration {
    pub kind: DecorationKind,
    pub color: Option<Color>,
}

impl LineDecoration {
    #[must_use]
    pub const fn new(kind: DecorationKind, color: Option<Color>) -> Self {
        Self { kind, color }
    }
}

/// Attributes a style range overrides.
///
/// Unset colors inherit from the label. An empty decoration list means no
/// line is drawn. At most one decoration of each [`DecorationKind`] is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    foreground: Option<Color>,
    background: Option<Color>,
    #[cfg_attr(feature = "serde", serde(default))]
    font_style: FontStyle,
    #[cfg_attr(feature = "serde", serde(default))]
    decorations: SmallVec<[LineDecoration; 2]>,
}

impl TextStyle {
    /// A style that overrides nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.font_style |= FontStyle::BOLD;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.font_style |= FontStyle::ITALIC;
        self
    }

    /// Add a decoration, replacing an existing one of the same kind.
    #[must_use]
    pub fn decorate(mut self, kind: DecorationKind, color: Option<Color>) -> Self {
        match self.decorations.iter_mut().find(|d| d.kind == kind) {
            Some(existing) => existing.color = color,
            None => self.decorations.push(LineDecoration::new(kind, color)),
        }
        self
    }

    pub fn foreground_color(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    pub fn font(&self) -> FontStyle {
        self.font_style
    }

    pub fn decorations(&self) -> &[LineDecoration] {
        &self.decorations
    }

    /// Decoration of the given kind, if present.
    pub fn decoration(&self, kind: DecorationKind) -> Option<&LineDecoration> {
        self.decorations.iter().find(|d| d.kind == kind)
    }

    /// Check if any color is set (text, background, or a decoration line).
    pub fn has_colors(&self) -> bool {
        self.foreground.is_some()
            || self.background.is_some()
            || self.decorations.iter().any(|d| d.color.is_some())
    }

    /// Copy of this style with every color removed.
    ///
    /// Font emphasis and decoration kinds survive; decoration lines fall
    /// back to the label foreground.
    #[must_use]
    pub fn without_colors(&self) -> Self {
        Self {
            foreground: None,
            background: None,
            font_style: self.font_style,
            decorations: self
                .decorations
                .iter()
                .map(|d| LineDecoration::new(d.kind, None))
                .collect(),
        }
    }
}
