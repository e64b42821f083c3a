#![forbid(unsafe_code)]

//! The styled label.
//!
//! # Example
//! ```
//! use styled_label_style::{Color, StyleRange};
//! use styled_label_text::CellMetrics;
//! use styled_label_widgets::StyledLabel;
//!
//! let mut label = StyledLabel::with_text("Hello styled world");
//! label.add_style_range(StyleRange::new(0, 5).unwrap().foreground(Color::RED)).unwrap();
//! label.add_style_range(StyleRange::new(6, 6).unwrap().bold()).unwrap();
//! label.set_columns(8);
//! label.set_line_wrap(true);
//!
//! let size = label.preferred_size(&CellMetrics::TERMINAL, None);
//! assert_eq!(size.width, 8);
//! assert_eq!(size.height, 3);
//! assert_eq!(label.styled_runs().len(), 4);
//! ```

use std::sync::Arc;

use styled_label_core::{ListenerId, Size};
use styled_label_layout::{LayoutConstraintResolver, LayoutConstraints, LayoutResolution};
use styled_label_style::{StyleRange, StyleRangeError};
use styled_label_text::{
    PropertyChange, PropertyListeners, SelectionColorPolicy, StyleRangeSet, StyledRun, TextMetrics,
    WrapMode, resolve_runs,
};
use tracing::trace;

use crate::align::HorizontalAlignment;
use crate::config::LabelConfig;

/// Gap between icon and text when none is configured.
pub const DEFAULT_ICON_TEXT_GAP: u32 = 4;

/// An icon, known to the label only by its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon {
    pub width: u32,
    pub height: u32,
}

impl Icon {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A label whose text carries per-range style overrides.
///
/// Style ranges live in a [`StyleRangeSet`] behind an `Arc`, so a render
/// thread can hold [`shared_ranges`](Self::shared_ranges) and snapshot it
/// while other threads keep adding ranges through the label.
///
/// Property changes for `"styleRange"` and `"ignoreColorSettings"` reach
/// every listener registered with [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct StyledLabel {
    text: String,
    icon: Option<Icon>,
    icon_text_gap: u32,
    alignment: HorizontalAlignment,
    maximum_size: Option<Size>,
    constraints: LayoutConstraints,
    ranges: Arc<StyleRangeSet>,
    selection: SelectionColorPolicy,
    listeners: Arc<PropertyListeners>,
}

impl StyledLabel {
    /// Name hosts use to look up the delegate that paints this label.
    pub const UI_CLASS_ID: &'static str = "StyledLabelUI";

    /// Empty label with default settings.
    pub fn new() -> Self {
        Self::from_config(&LabelConfig::default())
    }

    /// Empty label using `config` for line wrap, row gap and wrap mode.
    pub fn from_config(config: &LabelConfig) -> Self {
        let listeners = Arc::new(PropertyListeners::new());
        Self {
            text: String::new(),
            icon: None,
            icon_text_gap: DEFAULT_ICON_TEXT_GAP,
            alignment: HorizontalAlignment::default(),
            maximum_size: None,
            constraints: LayoutConstraints {
                line_wrap: config.line_wrap,
                row_gap: config.row_gap,
                wrap_mode: config.wrap_mode,
                ..LayoutConstraints::default()
            },
            ranges: Arc::new(StyleRangeSet::with_listeners(Arc::clone(&listeners))),
            selection: SelectionColorPolicy::with_listeners(Arc::clone(&listeners)),
            listeners,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut label = Self::new();
        label.text = text.into();
        label
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn ui_class_id(&self) -> &'static str {
        Self::UI_CLASS_ID
    }

    // --- base label properties ---

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Style ranges are kept as they are.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    pub fn icon_text_gap(&self) -> u32 {
        self.icon_text_gap
    }

    pub fn set_icon_text_gap(&mut self, gap: u32) {
        self.icon_text_gap = gap;
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.alignment = alignment;
    }

    /// `None` means unbounded.
    pub fn maximum_size(&self) -> Option<Size> {
        self.maximum_size
    }

    pub fn set_maximum_size(&mut self, size: Option<Size>) {
        self.maximum_size = size;
    }

    // --- style ranges ---

    /// Add a range, replacing any range with exactly the same interval.
    ///
    /// `None` is rejected with [`StyleRangeError::Missing`].
    pub fn add_style_range(
        &self,
        range: impl Into<Option<StyleRange>>,
    ) -> Result<(), StyleRangeError> {
        self.ranges.add(range)
    }

    /// Discard all ranges and add `ranges` in order.
    pub fn set_style_ranges<I>(&self, ranges: I)
    where
        I: IntoIterator<Item = StyleRange>,
    {
        self.ranges.replace_all(ranges);
    }

    pub fn add_style_ranges<I>(&self, ranges: I)
    where
        I: IntoIterator<Item = StyleRange>,
    {
        self.ranges.add_all(ranges);
    }

    /// Snapshot of the ranges in insertion order.
    pub fn style_ranges(&self) -> Vec<StyleRange> {
        self.ranges.snapshot()
    }

    /// Remove one value-equal range. Returns whether it was present.
    pub fn clear_style_range(&self, range: &StyleRange) -> bool {
        self.ranges.remove(range)
    }

    pub fn clear_style_ranges(&self) {
        self.ranges.clear();
    }

    /// The range set itself, for threads that render the label.
    pub fn shared_ranges(&self) -> Arc<StyleRangeSet> {
        Arc::clone(&self.ranges)
    }

    // --- selection colors ---

    pub fn is_ignore_color_settings(&self) -> bool {
        self.selection.is_ignoring()
    }

    /// Notifies only when the value changes.
    pub fn set_ignore_color_settings(&self, ignore: bool) {
        self.selection.set_ignoring(ignore);
    }

    pub fn selection_policy(&self) -> &SelectionColorPolicy {
        &self.selection
    }

    // --- layout constraints ---

    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    pub fn set_constraints(&mut self, constraints: LayoutConstraints) {
        self.constraints = constraints;
    }

    pub fn is_line_wrap(&self) -> bool {
        self.constraints.line_wrap
    }

    pub fn set_line_wrap(&mut self, line_wrap: bool) {
        self.constraints.line_wrap = line_wrap;
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.constraints.wrap_mode
    }

    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.constraints.wrap_mode = mode;
    }

    /// Preferred row count; zero or negative means unset.
    pub fn rows(&self) -> i32 {
        self.constraints.rows
    }

    pub fn set_rows(&mut self, rows: i32) {
        self.constraints.rows = rows;
    }

    /// Preferred column count; wins over [`rows`](Self::rows) when both are set.
    pub fn columns(&self) -> i32 {
        self.constraints.columns
    }

    pub fn set_columns(&mut self, columns: i32) {
        self.constraints.columns = columns;
    }

    /// Pixels between wrapped lines.
    pub fn row_gap(&self) -> u32 {
        self.constraints.row_gap
    }

    pub fn set_row_gap(&mut self, row_gap: u32) {
        self.constraints.row_gap = row_gap;
    }

    pub fn min_rows(&self) -> i32 {
        self.constraints.min_rows
    }

    pub fn set_min_rows(&mut self, min_rows: i32) {
        self.constraints.min_rows = min_rows;
    }

    pub fn max_rows(&self) -> i32 {
        self.constraints.max_rows
    }

    pub fn set_max_rows(&mut self, max_rows: i32) {
        self.constraints.max_rows = max_rows;
    }

    pub fn min_columns(&self) -> i32 {
        self.constraints.min_columns
    }

    pub fn set_min_columns(&mut self, min_columns: i32) {
        self.constraints.min_columns = min_columns;
    }

    pub fn max_columns(&self) -> i32 {
        self.constraints.max_columns
    }

    pub fn set_max_columns(&mut self, max_columns: i32) {
        self.constraints.max_columns = max_columns;
    }

    // --- notifications ---

    /// Register a property change listener.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&PropertyChange) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // --- rendering support ---

    /// Non-overlapping runs covering the text under the current color policy.
    pub fn styled_runs(&self) -> Vec<StyledRun> {
        resolve_runs(
            self.text.chars().count(),
            &self.ranges.snapshot(),
            self.selection.is_ignoring(),
        )
    }

    /// Lay out the text block for a space `text_width` wide.
    ///
    /// The maximum size applies to the whole label, so the icon and gap
    /// are taken off its width first.
    pub fn resolve_layout<M>(&self, metrics: &M, text_width: Option<u32>) -> LayoutResolution
    where
        M: TextMetrics + ?Sized,
    {
        let reserved = self.icon_reserve();
        let maximum = self.maximum_size.map(|max| Size {
            width: if max.has_finite_width() {
                max.width.saturating_sub(reserved)
            } else {
                max.width
            },
            ..max
        });
        LayoutConstraintResolver::new(&self.constraints, metrics)
            .maximum_size(maximum)
            .available_width(text_width)
            .resolve(&self.text)
    }

    /// Preferred size including the icon and gap.
    ///
    /// `available_width` is the width of the whole label and only matters
    /// when line wrap is on and no row or column count is set.
    pub fn preferred_size<M>(&self, metrics: &M, available_width: Option<u32>) -> Size
    where
        M: TextMetrics + ?Sized,
    {
        let text_width = available_width.map(|w| w.saturating_sub(self.icon_reserve()));
        let layout = self.resolve_layout(metrics, text_width);
        let size = self.with_icon_area(layout.size);
        trace!(
            width = size.width,
            height = size.height,
            basis = ?layout.basis,
            "preferred label size"
        );
        size
    }

    /// Height the label needs when laid out `width` pixels wide.
    pub fn height_for_width<M>(&self, metrics: &M, width: u32) -> u32
    where
        M: TextMetrics + ?Sized,
    {
        self.preferred_size(metrics, Some(width)).height
    }

    /// Width taken by the icon and the gap after it.
    fn icon_reserve(&self) -> u32 {
        match self.icon {
            Some(icon) if !self.text.is_empty() => icon.width.saturating_add(self.icon_text_gap),
            Some(icon) => icon.width,
            None => 0,
        }
    }

    fn with_icon_area(&self, text: Size) -> Size {
        let size = match self.icon {
            Some(icon) if self.text.is_empty() => icon.size(),
            Some(icon) => Size::new(
                text.width.saturating_add(self.icon_reserve()),
                text.height.max(icon.height),
            ),
            None => text,
        };
        match self.maximum_size {
            Some(max) => size.clamp_max(max),
            None => size,
        }
    }
}

impl Default for StyledLabel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use styled_label_style::Color;
    use styled_label_text::{CellMetrics, PropertyValue};

    fn range(start: usize, length: usize, color: Color) -> StyleRange {
        StyleRange::new(start, length).unwrap().foreground(color)
    }

    fn recording(label: &StyledLabel) -> Arc<Mutex<Vec<PropertyChange>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        label.subscribe(move |e| sink.lock().unwrap().push(e.clone()));
        log
    }

    #[test]
    fn ui_class_id() {
        assert_eq!(StyledLabel::new().ui_class_id(), "StyledLabelUI");
    }

    #[test]
    fn constructors() {
        let label = StyledLabel::with_text("hi").with_alignment(HorizontalAlignment::Center);
        assert_eq!(label.text(), "hi");
        assert_eq!(label.horizontal_alignment(), HorizontalAlignment::Center);
        assert_eq!(label.icon(), None);
        assert_eq!(label.maximum_size(), None);

        let label = StyledLabel::with_text("x").with_icon(Icon::new(16, 16));
        assert_eq!(label.icon(), Some(Icon::new(16, 16)));
        assert_eq!(label.horizontal_alignment(), HorizontalAlignment::Leading);
    }

    #[test]
    fn from_config_applies_defaults() {
        let config = LabelConfig::default()
            .line_wrap(true)
            .row_gap(2)
            .wrap_mode(WrapMode::Char);
        let label = StyledLabel::from_config(&config);
        assert!(label.is_line_wrap());
        assert_eq!(label.row_gap(), 2);
        assert_eq!(label.wrap_mode(), WrapMode::Char);
        assert_eq!(label.rows(), 0);
    }

    #[test]
    fn constraint_accessors_round_trip() {
        let mut label = StyledLabel::new();
        label.set_rows(3);
        label.set_columns(-1);
        label.set_min_rows(1);
        label.set_max_rows(5);
        label.set_min_columns(2);
        label.set_max_columns(9);
        label.set_row_gap(4);
        assert_eq!(
            (label.rows(), label.columns(), label.min_rows(), label.max_rows()),
            (3, -1, 1, 5)
        );
        assert_eq!((label.min_columns(), label.max_columns()), (2, 9));
        assert_eq!(label.constraints().columns(), None);
        assert_eq!(label.row_gap(), 4);
    }

    #[test]
    fn add_none_is_invalid_argument() {
        let label = StyledLabel::new();
        assert_eq!(label.add_style_range(None), Err(StyleRangeError::Missing));
        assert!(label.style_ranges().is_empty());
    }

    #[test]
    fn range_and_selection_events_share_listeners() {
        let label = StyledLabel::with_text("abc");
        let log = recording(&label);

        label.add_style_range(range(0, 1, Color::RED)).unwrap();
        label.set_ignore_color_settings(true);
        label.set_ignore_color_settings(true);

        let events = log.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_style_range());
        assert!(events[1].is_ignore_color_settings());
    }

    #[test]
    fn unsubscribe_stops_events() {
        let label = StyledLabel::new();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let id = label.subscribe(move |_| *sink.lock().unwrap() += 1);

        label.clear_style_ranges();
        assert!(label.unsubscribe(id));
        label.clear_style_ranges();
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn clear_style_range_reports_removal() {
        let label = StyledLabel::new();
        let r = range(2, 2, Color::BLUE);
        label.add_style_range(r.clone()).unwrap();
        let log = recording(&label);

        assert!(label.clear_style_range(&r));
        assert!(!label.clear_style_range(&r));
        let events = log.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].old, PropertyValue::Range(r));
    }

    #[test]
    fn styled_runs_follow_color_policy() {
        let label = StyledLabel::with_text("abcdef");
        label.add_style_range(range(1, 2, Color::RED).bold()).unwrap();

        let runs = label.styled_runs();
        assert_eq!(runs.len(), 3);
        let styled = runs[1].style.as_ref().unwrap();
        assert_eq!(styled.foreground_color(), Some(Color::RED));

        label.set_ignore_color_settings(true);
        let runs = label.styled_runs();
        let styled = runs[1].style.as_ref().unwrap();
        assert_eq!(styled.foreground_color(), None);
        assert!(styled.font().is_bold());
    }

    #[test]
    fn preferred_size_includes_icon_and_gap() {
        let mut label = StyledLabel::with_text("hello").with_icon(Icon::new(3, 4));
        label.set_icon_text_gap(2);
        let size = label.preferred_size(&CellMetrics::TERMINAL, None);
        assert_eq!(size, Size::new(3 + 2 + 5, 4));
    }

    #[test]
    fn icon_only_label_is_icon_sized() {
        let label = StyledLabel::new().with_icon(Icon::new(16, 12));
        assert_eq!(
            label.preferred_size(&CellMetrics::TERMINAL, None),
            Size::new(16, 12)
        );
    }

    #[test]
    fn maximum_size_bounds_the_whole_label() {
        let mut label = StyledLabel::with_text("hello world").with_icon(Icon::new(2, 1));
        label.set_icon_text_gap(1);
        label.set_line_wrap(true);
        label.set_maximum_size(Some(Size::new(8, u32::MAX)));

        let layout = label.resolve_layout(&CellMetrics::TERMINAL, None);
        assert_eq!(layout.wrap_width, Some(5));

        let size = label.preferred_size(&CellMetrics::TERMINAL, None);
        assert_eq!(size, Size::new(8, 2));
    }

    #[test]
    fn height_for_width_wraps_text() {
        let mut label = StyledLabel::with_text("aaa bbb ccc");
        label.set_line_wrap(true);
        label.set_row_gap(1);
        let metrics = CellMetrics::new(1, 2);

        assert_eq!(label.height_for_width(&metrics, 20), 2);
        assert_eq!(label.height_for_width(&metrics, 7), 2 + 1 + 2);
        assert_eq!(label.height_for_width(&metrics, 3), 3 * 2 + 2);
    }

    #[test]
    fn shared_ranges_see_label_mutations() {
        let label = StyledLabel::new();
        let shared = label.shared_ranges();
        label.add_style_range(range(0, 1, Color::RED)).unwrap();
        assert_eq!(shared.len(), 1);
    }
}
