#![forbid(unsafe_code)]

//! Thread-safe storage for style ranges.
//!
//! [`StyleRangeSet`] keeps ranges in insertion order. Adding a range whose
//! `(start, length)` exactly matches stored ranges evicts them and appends
//! the new one last, so the latest definition of an interval wins.
//!
//! Partially overlapping ranges are stored side by side; the set does not
//! try to resolve them. The label documentation has long said that an
//! overlapping second range "will be ignored", but the only rule the set
//! itself enforces is exact-interval replacement. Overlap between distinct
//! intervals is settled at render time by [`resolve_runs`](crate::resolve_runs).
//!
//! # Invariants
//!
//! 1. No two stored ranges share the same `(start, length)`.
//! 2. Order is insertion order; a replaced interval moves to the end.
//! 3. Every mutation and [`snapshot`](StyleRangeSet::snapshot) runs under
//!    one mutex, so readers never observe a half-applied batch.
//! 4. Listeners run on the calling thread after the lock is released.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use styled_label_style::{StyleRange, StyleRangeError};
use tracing::debug;

use crate::PropertyListeners;
use crate::event::{PropertyChange, PropertyValue};

/// Insertion-ordered, exact-interval-deduplicated style ranges.
#[derive(Debug)]
pub struct StyleRangeSet {
    ranges: Mutex<Vec<StyleRange>>,
    listeners: Arc<PropertyListeners>,
}

impl StyleRangeSet {
    /// Create an empty set with its own listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_listeners(Arc::new(PropertyListeners::new()))
    }

    /// Create an empty set that reports to `listeners`.
    #[must_use]
    pub fn with_listeners(listeners: Arc<PropertyListeners>) -> Self {
        Self {
            ranges: Mutex::new(Vec::new()),
            listeners,
        }
    }

    /// Listeners notified after each mutation.
    pub fn listeners(&self) -> &Arc<PropertyListeners> {
        &self.listeners
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StyleRange>> {
        // Nothing under this lock can panic halfway through a mutation, so a
        // poisoned guard still holds a consistent list.
        self.ranges.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one range, evicting any stored range with the same interval.
    ///
    /// Accepts `StyleRange` or `Option<StyleRange>`; `None` is rejected with
    /// [`StyleRangeError::Missing`] and leaves the set untouched.
    pub fn add(&self, range: impl Into<Option<StyleRange>>) -> Result<(), StyleRangeError> {
        let range = range.into().ok_or(StyleRangeError::Missing)?;

        let (evicted, len) = {
            let mut ranges = self.lock();
            let evicted = insert_replacing(&mut ranges, range.clone());
            (evicted, ranges.len())
        };

        debug!(
            op = "add",
            start = range.start(),
            length = range.length(),
            evicted,
            len,
            "style range added"
        );
        self.listeners.emit(&PropertyChange::style_range(
            PropertyValue::None,
            PropertyValue::Range(range),
        ));
        Ok(())
    }

    /// Add ranges in order, applying the eviction rule to each one.
    ///
    /// Always notifies, even for empty input.
    pub fn add_all<I>(&self, ranges: I)
    where
        I: IntoIterator<Item = StyleRange>,
    {
        let incoming: Vec<StyleRange> = ranges.into_iter().collect();

        let (evicted, len) = {
            let mut stored = self.lock();
            let evicted = incoming
                .iter()
                .map(|r| insert_replacing(&mut stored, r.clone()))
                .sum::<usize>();
            (evicted, stored.len())
        };

        debug!(
            op = "add_all",
            added = incoming.len(),
            evicted,
            len,
            "style ranges added"
        );
        self.listeners.emit(&PropertyChange::style_range(
            PropertyValue::None,
            PropertyValue::Ranges(incoming),
        ));
    }

    /// Discard every stored range, then add `ranges` as [`add_all`](Self::add_all) does.
    ///
    /// The clear and the adds happen under one lock acquisition and produce a
    /// single notification.
    pub fn replace_all<I>(&self, ranges: I)
    where
        I: IntoIterator<Item = StyleRange>,
    {
        let incoming: Vec<StyleRange> = ranges.into_iter().collect();

        let (discarded, len) = {
            let mut stored = self.lock();
            let discarded = stored.len();
            stored.clear();
            for r in &incoming {
                insert_replacing(&mut stored, r.clone());
            }
            (discarded, stored.len())
        };

        debug!(
            op = "replace_all",
            discarded,
            added = incoming.len(),
            len,
            "style ranges replaced"
        );
        self.listeners.emit(&PropertyChange::style_range(
            PropertyValue::None,
            PropertyValue::Ranges(incoming),
        ));
    }

    /// Remove the first stored range equal to `range` (interval and style).
    ///
    /// Returns `true` and notifies only if something was removed.
    pub fn remove(&self, range: &StyleRange) -> bool {
        let removed = {
            let mut stored = self.lock();
            stored
                .iter()
                .position(|r| r == range)
                .map(|index| stored.remove(index))
        };

        let Some(removed) = removed else {
            return false;
        };

        debug!(
            op = "remove",
            start = removed.start(),
            length = removed.length(),
            "style range removed"
        );
        self.listeners.emit(&PropertyChange::style_range(
            PropertyValue::Range(removed),
            PropertyValue::None,
        ));
        true
    }

    /// Remove every range. Always notifies, even when already empty.
    pub fn clear(&self) {
        let discarded = {
            let mut stored = self.lock();
            let discarded = stored.len();
            stored.clear();
            discarded
        };

        debug!(op = "clear", discarded, "style ranges cleared");
        self.listeners.emit(&PropertyChange::style_range(
            PropertyValue::None,
            PropertyValue::None,
        ));
    }

    /// Point-in-time copy of the stored ranges in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<StyleRange> {
        self.lock().clone()
    }

    /// Number of stored ranges.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StyleRangeSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop stored ranges with the same interval as `range`, then append it.
/// Returns how many were dropped.
fn insert_replacing(stored: &mut Vec<StyleRange>, range: StyleRange) -> usize {
    let before = stored.len();
    stored.retain(|existing| !existing.same_interval(&range));
    let evicted = before - stored.len();
    stored.push(range);
    evicted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use styled_label_style::Color;

    fn range(start: usize, length: usize, color: Color) -> StyleRange {
        StyleRange::new(start, length).unwrap().foreground(color)
    }

    fn recording(set: &StyleRangeSet) -> Arc<Mutex<Vec<PropertyChange>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        set.listeners()
            .subscribe(move |e: &PropertyChange| sink.lock().unwrap().push(e.clone()));
        log
    }

    #[test]
    fn starts_empty() {
        let set = StyleRangeSet::new();
        assert!(set.is_empty());
        assert!(set.snapshot().is_empty());
    }

    #[test]
    fn add_none_is_rejected_without_notification() {
        let set = StyleRangeSet::new();
        let log = recording(&set);

        assert_eq!(set.add(None), Err(StyleRangeError::Missing));
        assert!(set.is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn same_interval_replaces_and_moves_to_end() {
        let set = StyleRangeSet::new();
        set.add(range(0, 5, Color::RED)).unwrap();
        set.add(range(10, 3, Color::BLUE)).unwrap();
        set.add(range(0, 5, Color::GREEN)).unwrap();

        assert_eq!(
            set.snapshot(),
            vec![range(10, 3, Color::BLUE), range(0, 5, Color::GREEN)]
        );
    }

    #[test]
    fn different_length_same_start_is_kept() {
        let set = StyleRangeSet::new();
        set.add(range(5, 4, Color::RED)).unwrap();
        set.add(range(5, 3, Color::BLUE)).unwrap();

        assert_eq!(
            set.snapshot(),
            vec![range(5, 4, Color::RED), range(5, 3, Color::BLUE)]
        );
    }

    #[test]
    fn add_notifies_with_added_range() {
        let set = StyleRangeSet::new();
        let log = recording(&set);
        let r = range(1, 2, Color::RED);
        set.add(r.clone()).unwrap();

        let events = log.lock().unwrap();
        assert_eq!(
            *events,
            vec![PropertyChange::style_range(
                PropertyValue::None,
                PropertyValue::Range(r)
            )]
        );
    }

    #[test]
    fn add_all_dedups_within_batch() {
        let set = StyleRangeSet::new();
        set.add_all([
            range(0, 2, Color::RED),
            range(4, 2, Color::BLUE),
            range(0, 2, Color::GREEN),
        ]);

        assert_eq!(
            set.snapshot(),
            vec![range(4, 2, Color::BLUE), range(0, 2, Color::GREEN)]
        );
    }

    #[test]
    fn add_all_empty_still_notifies() {
        let set = StyleRangeSet::new();
        let log = recording(&set);
        set.add_all(Vec::new());

        let events = log.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].new, PropertyValue::Ranges(Vec::new()));
    }

    #[test]
    fn replace_all_discards_previous_content() {
        let set = StyleRangeSet::new();
        let (a, b, c) = (
            range(0, 1, Color::RED),
            range(2, 1, Color::GREEN),
            range(4, 1, Color::BLUE),
        );
        set.replace_all([a, b]);
        set.replace_all([c.clone()]);
        assert_eq!(set.snapshot(), vec![c]);
    }

    #[test]
    fn replace_all_notifies_once() {
        let set = StyleRangeSet::new();
        set.add(range(0, 1, Color::RED)).unwrap();
        let log = recording(&set);
        set.replace_all([range(3, 1, Color::RED)]);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn remove_requires_value_equality() {
        let set = StyleRangeSet::new();
        set.add(range(0, 5, Color::RED)).unwrap();
        let log = recording(&set);

        assert!(!set.remove(&range(0, 5, Color::BLUE)));
        assert!(log.lock().unwrap().is_empty());

        assert!(set.remove(&range(0, 5, Color::RED)));
        assert!(set.is_empty());
        let events = log.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].old, PropertyValue::Range(range(0, 5, Color::RED)));
        assert_eq!(events[0].new, PropertyValue::None);
    }

    #[test]
    fn clear_twice_notifies_twice() {
        let set = StyleRangeSet::new();
        set.add(range(0, 5, Color::RED)).unwrap();
        let log = recording(&set);

        set.clear();
        assert!(set.snapshot().is_empty());
        set.clear();
        assert!(set.snapshot().is_empty());

        let events = log.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.old == PropertyValue::None
            && e.new == PropertyValue::None
            && e.is_style_range()));
    }

    #[test]
    fn snapshot_is_detached() {
        let set = StyleRangeSet::new();
        set.add(range(0, 1, Color::RED)).unwrap();
        let snap = set.snapshot();
        set.clear();
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn listener_may_read_the_set() {
        let set = Arc::new(StyleRangeSet::new());
        let seen = Arc::new(Mutex::new(0));
        let (reader, sink) = (Arc::clone(&set), Arc::clone(&seen));
        set.listeners().subscribe(move |_| {
            // Runs after the lock is released, so this does not deadlock.
            *sink.lock().unwrap() = reader.snapshot().len();
        });

        set.add(range(0, 1, Color::RED)).unwrap();
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn shared_listeners_see_events() {
        let listeners = Arc::new(PropertyListeners::new());
        let set = StyleRangeSet::with_listeners(Arc::clone(&listeners));
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        listeners.subscribe(move |_| *sink.lock().unwrap() += 1);

        set.clear();
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[tracing_test::traced_test]
    #[test]
    fn add_logs_eviction() {
        let set = StyleRangeSet::new();
        set.add(range(0, 5, Color::RED)).unwrap();
        set.add(range(0, 5, Color::GREEN)).unwrap();
        assert!(logs_contain("style range added"));
        assert!(logs_contain("evicted=1"));
    }
}
