#![forbid(unsafe_code)]

//! Turning [`LayoutConstraints`] into a concrete layout.
//!
//! The resolver picks a wrap width from the strongest setting present,
//! applies the maximum size as a ceiling, wraps the text, and then derives
//! a line budget and a pixel size.
//!
//! # Invariants
//!
//! 1. With a finite maximum size, `size` never exceeds it on that axis.
//! 2. Min bounds apply before max bounds, so a conflicting max wins.
//! 3. `lines` is never empty and never longer than `line_budget`.
//! 4. The same inputs always produce the same resolution and warnings.

use std::fmt;

use styled_label_core::Size;
use styled_label_text::{LineSpan, TextMetrics, WrapMode, wrap_lines};
use tracing::{trace, trace_span, warn};

use crate::constraints::LayoutConstraints;

/// Which setting decided the wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizingBasis {
    /// The maximum width was narrower than anything else asked for.
    MaximumSize,
    Columns,
    Rows,
    AvailableWidth,
    /// No wrapping; lines break only at newlines.
    Natural,
}

/// A contradictory setting that was resolved rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintWarning {
    /// `min_columns > max_columns`; `max_columns` was used.
    MinColumnsExceedsMax { min: u32, max: u32 },
    /// `min_rows > max_rows`; `max_rows` was used.
    MinRowsExceedsMax { min: u32, max: u32 },
    /// Both `rows` and `columns` were set; `rows` was ignored.
    RowsIgnored { rows: u32, columns: u32 },
}

impl fmt::Display for ConstraintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinColumnsExceedsMax { min, max } => {
                write!(f, "min_columns {min} exceeds max_columns {max}, using {max}")
            }
            Self::MinRowsExceedsMax { min, max } => {
                write!(f, "min_rows {min} exceeds max_rows {max}, using {max}")
            }
            Self::RowsIgnored { rows, columns } => {
                write!(f, "rows {rows} ignored because columns {columns} is set")
            }
        }
    }
}

/// Result of [`LayoutConstraintResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResolution {
    /// Width the text was wrapped at, `None` if it was not wrapped.
    pub wrap_width: Option<u32>,
    /// Most lines that may be shown, `None` if unlimited.
    pub line_budget: Option<usize>,
    /// Visible lines, already cut to the budget.
    pub lines: Vec<LineSpan>,
    /// Whether lines were cut to fit the budget.
    pub truncated: bool,
    /// Preferred size of the text block, excluding any icon.
    pub size: Size,
    pub warnings: Vec<ConstraintWarning>,
    pub basis: SizingBasis,
}

impl LayoutResolution {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Resolves constraints for one piece of text against one font.
///
/// # Example
/// ```
/// use styled_label_layout::{LayoutConstraintResolver, LayoutConstraints, Size, SizingBasis};
/// use styled_label_text::CellMetrics;
///
/// let constraints = LayoutConstraints { line_wrap: true, ..LayoutConstraints::default() };
/// let resolution = LayoutConstraintResolver::new(&constraints, &CellMetrics::TERMINAL)
///     .maximum_size(Some(Size::new(5, u32::MAX)))
///     .resolve("hello world");
///
/// assert_eq!(resolution.basis, SizingBasis::MaximumSize);
/// assert_eq!(resolution.line_count(), 2);
/// assert_eq!(resolution.size, Size::new(5, 2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutConstraintResolver<'a, M: ?Sized> {
    constraints: &'a LayoutConstraints,
    metrics: &'a M,
    maximum_size: Option<Size>,
    available_width: Option<u32>,
}

impl<'a, M: TextMetrics + ?Sized> LayoutConstraintResolver<'a, M> {
    /// Resolver with no maximum size and no available width.
    pub fn new(constraints: &'a LayoutConstraints, metrics: &'a M) -> Self {
        Self {
            constraints,
            metrics,
            maximum_size: None,
            available_width: None,
        }
    }

    /// Absolute ceiling. `u32::MAX` on an axis leaves that axis unbounded.
    #[must_use]
    pub fn maximum_size(mut self, size: Option<Size>) -> Self {
        self.maximum_size = size;
        self
    }

    /// Width offered by the container; used only when line wrap is on and
    /// no count is set.
    #[must_use]
    pub fn available_width(mut self, width: Option<u32>) -> Self {
        self.available_width = width;
        self
    }

    pub fn resolve(&self, text: &str) -> LayoutResolution {
        let span = trace_span!("resolve_layout", chars = text.chars().count());
        let _guard = span.enter();

        let c = self.constraints;
        let col_w = self.metrics.column_width().max(1);
        let mut warnings = Vec::new();

        let columns = Bounds::new(c.min_columns(), c.max_columns());
        if let Some((min, max)) = columns.conflict() {
            warn!(min, max, "min_columns exceeds max_columns, using max_columns");
            warnings.push(ConstraintWarning::MinColumnsExceedsMax { min, max });
        }
        let rows = Bounds::new(c.min_rows(), c.max_rows());
        if let Some((min, max)) = rows.conflict() {
            warn!(min, max, "min_rows exceeds max_rows, using max_rows");
            warnings.push(ConstraintWarning::MinRowsExceedsMax { min, max });
        }

        let pixel_columns = columns.scaled(col_w);
        let max_width = self
            .maximum_size
            .filter(Size::has_finite_width)
            .map(|s| s.width);
        let max_height = self
            .maximum_size
            .filter(Size::has_finite_height)
            .map(|s| s.height);

        let mut basis;
        let mut wrap_width;
        let mut target_rows = None;
        let mut fixed_width = None;

        if let Some(n) = c.columns() {
            if let Some(r) = c.rows() {
                warn!(rows = r, columns = n, "rows ignored because columns is set");
                warnings.push(ConstraintWarning::RowsIgnored {
                    rows: r,
                    columns: n,
                });
            }
            let width = pixel_columns.clamp(n.saturating_mul(col_w));
            basis = SizingBasis::Columns;
            wrap_width = c.line_wrap.then_some(width);
            fixed_width = Some(width);
        } else if let Some(r) = c.rows() {
            let target = rows.clamp(r);
            basis = SizingBasis::Rows;
            wrap_width = c
                .line_wrap
                .then(|| pixel_columns.clamp(self.narrowest_width_for(text, target)));
            target_rows = Some(target);
        } else if let (true, Some(available)) = (c.line_wrap, self.available_width) {
            basis = SizingBasis::AvailableWidth;
            wrap_width = Some(pixel_columns.clamp(available));
        } else {
            basis = SizingBasis::Natural;
            wrap_width = None;
        }

        if let Some(max_w) = max_width {
            let capped = match wrap_width {
                Some(w) => w > max_w,
                None => c.line_wrap,
            };
            if capped {
                wrap_width = Some(max_w);
                basis = SizingBasis::MaximumSize;
            }
        }

        let mut lines = wrap_lines(text, wrap_width, c.wrap_mode, self.metrics);

        let line_h = self.metrics.line_height();
        let by_height = max_height.and_then(|h| rows_fitting(h, line_h, c.row_gap));
        let line_budget = [rows.max, target_rows, by_height]
            .into_iter()
            .flatten()
            .min()
            .map(|n| n as usize);

        let truncated = match line_budget {
            Some(budget) if lines.len() > budget => {
                lines.truncate(budget);
                true
            }
            _ => false,
        };

        let visible = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let height_rows = rows.clamp(target_rows.unwrap_or(visible));
        let mut height = stack_height(height_rows, line_h, c.row_gap);

        let mut width = fixed_width.unwrap_or_else(|| {
            let content = lines.iter().map(|l| l.width).max().unwrap_or(0);
            pixel_columns.clamp(content)
        });

        if let Some(max_w) = max_width {
            width = width.min(max_w);
        }
        if let Some(max_h) = max_height {
            height = height.min(max_h);
        }

        trace!(
            ?basis,
            ?wrap_width,
            lines = lines.len(),
            truncated,
            width,
            height,
            "layout resolved"
        );

        LayoutResolution {
            wrap_width,
            line_budget,
            lines,
            truncated,
            size: Size::new(width, height),
            warnings,
            basis,
        }
    }

    /// Narrowest wrap width at which `text` takes at most `target` lines.
    ///
    /// Falls back to the natural width when hard newlines alone exceed the
    /// target.
    fn narrowest_width_for(&self, text: &str, target: u32) -> u32 {
        let mode = self.constraints.wrap_mode;
        let target = target as usize;
        let natural = wrap_lines(text, None, mode, self.metrics);
        let natural_width = natural.iter().map(|l| l.width).max().unwrap_or(0);
        if natural.len() > target || natural_width == 0 {
            return natural_width;
        }

        let fits = |width: u32| line_count(text, width, mode, self.metrics) <= target;
        let (mut lo, mut hi) = (1, natural_width);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        hi
    }
}

fn line_count<M: TextMetrics + ?Sized>(text: &str, width: u32, mode: WrapMode, metrics: &M) -> usize {
    wrap_lines(text, Some(width), mode, metrics).len()
}

/// Lines that fit in `height` pixels, at least one.
fn rows_fitting(height: u32, line_h: u32, gap: u32) -> Option<u32> {
    let pitch = line_h.saturating_add(gap);
    if pitch == 0 {
        return None;
    }
    Some((height.saturating_add(gap) / pitch).max(1))
}

/// Height of `rows` lines separated by `gap`.
fn stack_height(rows: u32, line_h: u32, gap: u32) -> u32 {
    let rows = rows.max(1);
    rows.saturating_mul(line_h)
        .saturating_add((rows - 1).saturating_mul(gap))
}

/// Optional min/max pair applied min first, then max.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: Option<u32>,
    max: Option<u32>,
}

impl Bounds {
    fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    fn conflict(&self) -> Option<(u32, u32)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }

    fn scaled(&self, factor: u32) -> Self {
        Self {
            min: self.min.map(|n| n.saturating_mul(factor)),
            max: self.max.map(|n| n.saturating_mul(factor)),
        }
    }

    fn clamp(&self, value: u32) -> u32 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}
