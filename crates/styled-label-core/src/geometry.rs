#![forbid(unsafe_code)]

//! Geometric primitives.

/// A width/height pair in pixels.
///
/// A component equal to `u32::MAX` is treated as unbounded by the layout
/// resolver, so `Size::MAX` reads as "no ceiling on either axis".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Zero-sized.
    pub const ZERO: Self = Self::new(0, 0);

    /// Unbounded on both axes.
    pub const MAX: Self = Self::new(u32::MAX, u32::MAX);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the width is a real bound rather than the unbounded sentinel.
    #[inline]
    pub const fn has_finite_width(&self) -> bool {
        self.width != u32::MAX
    }

    /// Whether the height is a real bound rather than the unbounded sentinel.
    #[inline]
    pub const fn has_finite_height(&self) -> bool {
        self.height != u32::MAX
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn clamp_max(self, max: Size) -> Size {
        Size::new(self.width.min(max.width), self.height.min(max.height))
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_unbounded_on_both_axes() {
        assert!(!Size::MAX.has_finite_width());
        assert!(!Size::MAX.has_finite_height());
        assert!(Size::new(10, 0).has_finite_width());
    }

    #[test]
    fn zero_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(3, 0).is_empty());
        assert!(!Size::new(3, 4).is_empty());
    }

    #[test]
    fn clamp_max_is_componentwise() {
        let size = Size::new(100, 5);
        assert_eq!(size.clamp_max(Size::new(40, 40)), Size::new(40, 5));
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Size::from((7, 9)), Size::new(7, 9));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn size_strategy() -> impl Strategy<Value = Size> {
        (any::<u32>(), any::<u32>()).prop_map(|(w, h)| Size::new(w, h))
    }

    proptest! {
        #[test]
        fn clamp_max_never_exceeds_bound(a in size_strategy(), b in size_strategy()) {
            let clamped = a.clamp_max(b);
            prop_assert!(clamped.width <= b.width);
            prop_assert!(clamped.height <= b.height);
        }

        #[test]
        fn clamp_with_max_is_identity(a in size_strategy()) {
            prop_assert_eq!(a.clamp_max(Size::MAX), a);
        }
    }
}
