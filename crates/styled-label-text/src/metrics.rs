#![forbid(unsafe_code)]

//! Text measurement capability.
//!
//! Layout never talks to a font directly. Hosts implement [`TextMetrics`]
//! for whatever font the label is drawn with; [`CellMetrics`] covers
//! fixed-cell surfaces such as terminals and is what the tests use.

use unicode_width::UnicodeWidthStr;

/// Measures text for one font.
pub trait TextMetrics {
    /// Advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Height of one line in pixels.
    fn line_height(&self) -> u32;

    /// Width of one "column" used to size the label from a character count.
    ///
    /// Defaults to the width of `m`.
    fn column_width(&self) -> u32 {
        self.text_width("m")
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn text_width(&self, text: &str) -> u32 {
        (**self).text_width(text)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }

    fn column_width(&self) -> u32 {
        (**self).column_width()
    }
}

/// Display width of text in cells (CJK and emoji count as two).
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Metrics for a fixed cell grid.
///
/// Each cell is `cell_width` × `cell_height` pixels; a string is as wide
/// as its Unicode display width in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMetrics {
    cell_width: u32,
    cell_height: u32,
}

impl CellMetrics {
    /// One pixel per cell: widths and heights are cell counts.
    pub const TERMINAL: Self = Self::new(1, 1);

    /// Create metrics for cells of the given pixel size. Zero is raised to one.
    #[must_use]
    pub const fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: if cell_width == 0 { 1 } else { cell_width },
            cell_height: if cell_height == 0 { 1 } else { cell_height },
        }
    }

    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::TERMINAL
    }
}

impl TextMetrics for CellMetrics {
    fn text_width(&self, text: &str) -> u32 {
        let cells = u32::try_from(display_width(text)).unwrap_or(u32::MAX);
        cells.saturating_mul(self.cell_width)
    }

    fn line_height(&self) -> u32 {
        self.cell_height
    }

    fn column_width(&self) -> u32 {
        self.cell_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_widths_are_cells() {
        let m = CellMetrics::TERMINAL;
        assert_eq!(m.text_width("hello"), 5);
        assert_eq!(m.text_width("你好"), 4);
        assert_eq!(m.line_height(), 1);
        assert_eq!(m.column_width(), 1);
    }

    #[test]
    fn scaled_cells() {
        let m = CellMetrics::new(8, 16);
        assert_eq!(m.text_width("abc"), 24);
        assert_eq!(m.line_height(), 16);
        assert_eq!(m.column_width(), 8);
    }

    #[test]
    fn zero_cell_size_is_raised() {
        let m = CellMetrics::new(0, 0);
        assert_eq!(m.cell_width(), 1);
        assert_eq!(m.cell_height(), 1);
    }

    struct Proportional;

    impl TextMetrics for Proportional {
        fn text_width(&self, text: &str) -> u32 {
            text.chars().map(|c| if c == 'm' { 9 } else { 5 }).sum()
        }

        fn line_height(&self) -> u32 {
            12
        }
    }

    #[test]
    fn column_width_defaults_to_m() {
        assert_eq!(Proportional.column_width(), 9);
        let by_ref: &dyn TextMetrics = &Proportional;
        assert_eq!(by_ref.column_width(), 9);
    }
}
