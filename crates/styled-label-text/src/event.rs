#![forbid(unsafe_code)]

//! Property change events.
//!
//! Every event names the property that changed and carries the old and new
//! values. Style range events follow these shapes:
//!
//! | operation            | old               | new                  |
//! |----------------------|-------------------|----------------------|
//! | add one range        | `None`            | `Range(added)`       |
//! | add or set many      | `None`            | `Ranges(incoming)`   |
//! | remove one range     | `Range(removed)`  | `None`               |
//! | clear                | `None`            | `None`               |
//!
//! An `add_all` with no input still reports `Ranges([])`, so listeners can
//! tell a vacuous call apart from a clear.

use styled_label_style::StyleRange;

/// Name of the property reported for style range changes.
pub const PROPERTY_STYLE_RANGE: &str = "styleRange";

/// Name of the property reported when the selection color policy toggles.
pub const PROPERTY_IGNORE_COLOR_SETTINGS: &str = "ignoreColorSettings";

/// Old or new value carried by a [`PropertyChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    None,
    Range(StyleRange),
    Ranges(Vec<StyleRange>),
    Bool(bool),
}

/// A `(property, old, new)` change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub property: &'static str,
    pub old: PropertyValue,
    pub new: PropertyValue,
}

impl PropertyChange {
    /// A change of the style range property.
    #[must_use]
    pub fn style_range(old: PropertyValue, new: PropertyValue) -> Self {
        Self {
            property: PROPERTY_STYLE_RANGE,
            old,
            new,
        }
    }

    /// A toggle of the ignore-color-settings flag.
    #[must_use]
    pub fn ignore_color_settings(old: bool, new: bool) -> Self {
        Self {
            property: PROPERTY_IGNORE_COLOR_SETTINGS,
            old: PropertyValue::Bool(old),
            new: PropertyValue::Bool(new),
        }
    }

    pub fn is_style_range(&self) -> bool {
        self.property == PROPERTY_STYLE_RANGE
    }

    pub fn is_ignore_color_settings(&self) -> bool {
        self.property == PROPERTY_IGNORE_COLOR_SETTINGS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_range_event_uses_property_name() {
        let event = PropertyChange::style_range(PropertyValue::None, PropertyValue::None);
        assert_eq!(event.property, "styleRange");
        assert!(event.is_style_range());
        assert!(!event.is_ignore_color_settings());
    }

    #[test]
    fn ignore_color_settings_event_carries_bools() {
        let event = PropertyChange::ignore_color_settings(false, true);
        assert_eq!(event.property, "ignoreColorSettings");
        assert_eq!(event.old, PropertyValue::Bool(false));
        assert_eq!(event.new, PropertyValue::Bool(true));
    }
}
