//! Extent and Orientation: size primitives for layout calculations.

use std::fmt;

/// A size in character cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Zero-sized extent ("not yet sized").
    pub const ZERO: Self = Self::new(0, 0);

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }

    /// Check if the extent covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The dimension that `orientation` splits.
    #[inline]
    pub const fn along(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// The same extent with the split dimension replaced.
    #[inline]
    #[must_use]
    pub const fn with_along(&self, orientation: Orientation, value: u16) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(value, self.height),
            Orientation::Vertical => Self::new(self.width, value),
        }
    }
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extent({}x{})", self.width, self.height)
    }
}

impl From<(u16, u16)> for Extent {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

/// How an internal node arranges its children.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Orientation {
    /// Children placed left-to-right, each spanning the full height.
    #[default]
    Horizontal,
    /// Children stacked top-to-bottom, each spanning the full width.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_along() {
        let extent = Extent::new(80, 24);
        assert_eq!(extent.along(Orientation::Horizontal), 80);
        assert_eq!(extent.along(Orientation::Vertical), 24);
    }

    #[test]
    fn test_extent_with_along() {
        let extent = Extent::new(80, 24);
        assert_eq!(extent.with_along(Orientation::Horizontal, 10), Extent::new(10, 24));
        assert_eq!(extent.with_along(Orientation::Vertical, 3), Extent::new(80, 3));
    }

    #[test]
    fn test_extent_empty() {
        assert!(Extent::ZERO.is_empty());
        assert!(Extent::new(5, 0).is_empty());
        assert!(!Extent::new(1, 1).is_empty());
        assert_eq!(Extent::new(80, 24).area(), 1920);
    }
}
