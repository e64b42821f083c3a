#![forbid(unsafe_code)]

//! Flattening style ranges into drawable runs.
//!
//! Stored ranges may overlap. Drawing needs a partition of the text, so
//! [`resolve_runs`] orders ranges by start offset (ties keep insertion
//! order) and applies them first-come: a range that shares any character
//! with an already applied range is skipped as a whole. Gaps between
//! applied ranges become unstyled runs.

use styled_label_style::{StyleRange, TextStyle};

use crate::wrap::LineSpan;

/// A maximal stretch of characters `[start, end)` drawn with one style.
///
/// `style == None` means the label's own font and colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledRun {
    pub start: usize,
    pub end: usize,
    pub style: Option<TextStyle>,
}

impl StyledRun {
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `[0, text_len)` into runs.
///
/// Ranges are clipped to the text; ranges starting at or past `text_len`
/// are dropped. With `ignore_colors` every applied style is stripped of its
/// colors. Returns an empty vec for empty text; otherwise the runs are
/// contiguous, non-empty, and cover the whole text.
#[must_use]
pub fn resolve_runs(text_len: usize, ranges: &[StyleRange], ignore_colors: bool) -> Vec<StyledRun> {
    if text_len == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<&StyleRange> = ranges.iter().filter(|r| r.start() < text_len).collect();
    ordered.sort_by_key(|r| r.start());

    let mut runs = Vec::new();
    let mut cursor = 0;
    let mut applied: Option<&StyleRange> = None;
    for range in ordered {
        // Sorted by start, so only the last applied range can overlap.
        if applied.is_some_and(|last| last.intersects(range)) {
            continue;
        }
        if range.start() > cursor {
            runs.push(StyledRun {
                start: cursor,
                end: range.start(),
                style: None,
            });
        }
        let end = range.end().min(text_len);
        let style = if ignore_colors {
            range.style().without_colors()
        } else {
            range.style().clone()
        };
        runs.push(StyledRun {
            start: range.start(),
            end,
            style: Some(style),
        });
        cursor = end;
        applied = Some(range);
    }

    if cursor < text_len {
        runs.push(StyledRun {
            start: cursor,
            end: text_len,
            style: None,
        });
    }
    runs
}

/// The parts of `runs` that fall on `line`, clipped to its bounds.
pub fn runs_in_line<'a>(
    runs: &'a [StyledRun],
    line: &'a LineSpan,
) -> impl Iterator<Item = StyledRun> + 'a {
    runs.iter()
        .filter(move |run| run.start < line.end && line.start < run.end)
        .map(move |run| StyledRun {
            start: run.start.max(line.start),
            end: run.end.min(line.end),
            style: run.style.clone(),
        })
}
