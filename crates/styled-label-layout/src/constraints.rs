#![forbid(unsafe_code)]

//! Row and column constraints.

use styled_label_text::WrapMode;

/// Sizing settings for a label.
///
/// Counts are signed; zero or negative means "unset". `columns` beats
/// `rows` when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConstraints {
    /// Preferred number of text rows.
    pub rows: i32,
    /// Preferred number of columns, in units of the metrics column width.
    pub columns: i32,
    pub min_rows: i32,
    pub min_columns: i32,
    pub max_rows: i32,
    pub max_columns: i32,
    /// Pixels between consecutive lines.
    pub row_gap: u32,
    /// Whether text wraps to fit the width.
    pub line_wrap: bool,
    pub wrap_mode: WrapMode,
}

impl LayoutConstraints {
    /// No counts, no gap, no wrapping.
    pub const UNCONSTRAINED: Self = Self {
        rows: 0,
        columns: 0,
        min_rows: 0,
        min_columns: 0,
        max_rows: 0,
        max_columns: 0,
        row_gap: 0,
        line_wrap: false,
        wrap_mode: WrapMode::WordChar,
    };

    pub fn rows(&self) -> Option<u32> {
        positive(self.rows)
    }

    pub fn columns(&self) -> Option<u32> {
        positive(self.columns)
    }

    pub fn min_rows(&self) -> Option<u32> {
        positive(self.min_rows)
    }

    pub fn min_columns(&self) -> Option<u32> {
        positive(self.min_columns)
    }

    pub fn max_rows(&self) -> Option<u32> {
        positive(self.max_rows)
    }

    pub fn max_columns(&self) -> Option<u32> {
        positive(self.max_columns)
    }
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

/// A count if it is set.
#[inline]
pub(crate) fn positive(count: i32) -> Option<u32> {
    u32::try_from(count).ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_counts_are_unset() {
        let c = LayoutConstraints {
            rows: 0,
            columns: -4,
            max_rows: 3,
            ..LayoutConstraints::default()
        };
        assert_eq!(c.rows(), None);
        assert_eq!(c.columns(), None);
        assert_eq!(c.max_rows(), Some(3));
    }

    #[test]
    fn default_is_unconstrained() {
        let c = LayoutConstraints::default();
        assert_eq!(c, LayoutConstraints::UNCONSTRAINED);
        assert!(!c.line_wrap);
        assert_eq!(c.wrap_mode, WrapMode::WordChar);
    }
}
