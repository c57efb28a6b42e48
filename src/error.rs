//! Typed errors for layout, rendering and tree construction.
//!
//! Every failure inside the recursive render is wrapped once per level in
//! [`LayoutError::Child`], so the full path from the root to the failing node
//! can be reconstructed with [`LayoutError::path`] while the original cause
//! stays reachable through [`LayoutError::root_cause`].

use thiserror::Error;

use crate::layout::Orientation;

/// Errors produced while building, configuring or rendering a layout tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    // -----------------------------------------------------------------------
    // Space
    // -----------------------------------------------------------------------
    /// Nothing is left to distribute after reserving separator cells.
    ///
    /// Expected on small viewports; hosts should show a fallback until the
    /// viewport grows.
    #[error("insufficient space in node '{name}': {available} cells along the split axis, {reserved} reserved for separators")]
    InsufficientSpace {
        /// Name of the internal node (may be empty).
        name: String,
        /// Extent along the split axis before reservation.
        available: u16,
        /// Cells reserved for separators.
        reserved: u16,
    },

    // -----------------------------------------------------------------------
    // Custom distributor contract
    // -----------------------------------------------------------------------
    /// A size function returned the wrong number of extents.
    #[error("size function of node '{name}' returned {actual} extents for {expected} visible children")]
    DistributionShape {
        /// Name of the internal node (may be empty).
        name: String,
        /// Number of non-hidden children.
        expected: usize,
        /// Number of extents returned.
        actual: usize,
    },

    /// A size function returned extents that do not add up to the input.
    #[error("size function of node '{name}' distributed {actual} cells, expected exactly {expected}")]
    DistributionSum {
        /// Name of the internal node (may be empty).
        name: String,
        /// The extent handed to the size function.
        expected: u32,
        /// The sum of the returned extents.
        actual: u32,
    },

    // -----------------------------------------------------------------------
    // Content overflow
    // -----------------------------------------------------------------------
    /// A leaf produced more lines than its height.
    #[error("content of leaf '{name}' has {lines} lines, only {height} fit")]
    ContentTooTall {
        /// Leaf name.
        name: String,
        /// Lines produced.
        lines: usize,
        /// Assigned height.
        height: u16,
    },

    /// A leaf produced a line wider than its width.
    #[error("line {line} of leaf '{name}' is {width} columns wide, only {max} fit")]
    ContentTooWide {
        /// Leaf name.
        name: String,
        /// Zero-based index of the offending line.
        line: usize,
        /// Measured display width.
        width: usize,
        /// Assigned width.
        max: u16,
    },

    /// A leaf produced a line holding a control character (tab, carriage
    /// return, bell, ...) whose on-screen width cannot be known.
    #[error("line {line} of leaf '{name}' contains control character {character:?}")]
    ControlCharacter {
        /// Leaf name.
        name: String,
        /// Zero-based index of the offending line.
        line: usize,
        /// The first control character found.
        character: char,
    },

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------
    /// An internal node has no visible children at render time.
    #[error("node '{name}' has no visible children")]
    NoVisibleChildren {
        /// Name of the internal node (may be empty).
        name: String,
    },

    /// A leaf was created with an empty name.
    #[error("leaf name must not be empty")]
    EmptyLeafName,

    /// A leaf name is already in use in the same tree.
    #[error("leaf name '{name}' is already in use")]
    DuplicateLeafName {
        /// The duplicated name.
        name: String,
    },

    /// The layout configuration cannot produce exact rectangles.
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    // -----------------------------------------------------------------------
    // Positional wrapping
    // -----------------------------------------------------------------------
    /// A failure inside a child, annotated with its position in the parent.
    #[error("child {index} of {orientation} node: {source}")]
    Child {
        /// Index of the child in the parent's `children`.
        index: usize,
        /// Orientation of the parent.
        orientation: Orientation,
        /// The child's failure.
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    /// Wrap `self` with the position of the child it came from.
    #[must_use]
    pub fn in_child(self, index: usize, orientation: Orientation) -> Self {
        Self::Child {
            index,
            orientation,
            source: Box::new(self),
        }
    }

    /// The innermost error, with all positional wrapping removed.
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Child { source, .. } = current {
            current = source;
        }
        current
    }

    /// Positions from the root down to the failing node.
    pub fn path(&self) -> Vec<(usize, Orientation)> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Child {
            index,
            orientation,
            source,
        } = current
        {
            path.push((*index, *orientation));
            current = source;
        }
        path
    }

    /// Whether re-rendering on a larger viewport may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.root_cause(), Self::InsufficientSpace { .. })
    }

    /// Whether a leaf produced more or wider lines than it was given.
    pub fn is_content_overflow(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::ContentTooTall { .. } | Self::ContentTooWide { .. }
        )
    }
}
