#![forbid(unsafe_code)]

//! Horizontal placement of label content.

/// Horizontal alignment of the icon and text block inside the label bounds.
///
/// `Leading` and `Trailing` follow the reading direction; the others are
/// absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HorizontalAlignment {
    /// Start of the line in the reading direction (default).
    #[default]
    Leading,
    Left,
    Center,
    Right,
    /// End of the line in the reading direction.
    Trailing,
}

impl HorizontalAlignment {
    /// Map to an absolute alignment for the given reading direction.
    #[must_use]
    pub const fn resolve(self, right_to_left: bool) -> Self {
        match (self, right_to_left) {
            (Self::Leading, false) | (Self::Trailing, true) => Self::Left,
            (Self::Leading, true) | (Self::Trailing, false) => Self::Right,
            (other, _) => other,
        }
    }

    /// Offset of content `content` wide inside `available`, left to right.
    ///
    /// Content wider than the space is pinned to the left edge.
    #[must_use]
    pub const fn offset(self, content: u32, available: u32, right_to_left: bool) -> u32 {
        let slack = available.saturating_sub(content);
        match self.resolve(right_to_left) {
            Self::Center => slack / 2,
            Self::Right => slack,
            _ => 0,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn alignment() -> impl Strategy<Value = HorizontalAlignment> {
        prop_oneof![
            Just(HorizontalAlignment::Leading),
            Just(HorizontalAlignment::Left),
            Just(HorizontalAlignment::Center),
            Just(HorizontalAlignment::Right),
            Just(HorizontalAlignment::Trailing),
        ]
    }

    proptest! {
        #[test]
        fn content_stays_inside(
            a in alignment(),
            content in 0u32..500,
            available in 0u32..500,
            rtl in any::<bool>(),
        ) {
            let offset = a.offset(content, available, rtl);
            if content <= available {
                prop_assert!(offset + content <= available);
            } else {
                prop_assert_eq!(offset, 0);
            }
        }

        #[test]
        fn resolved_alignment_is_absolute(a in alignment(), rtl in any::<bool>()) {
            let resolved = a.resolve(rtl);
            prop_assert!(!matches!(
                resolved,
                HorizontalAlignment::Leading | HorizontalAlignment::Trailing
            ));
        }
    }
}
