//! Layout configuration: fill and separator characters, placeholder text.

use crate::error::LayoutError;
use crate::measure::display_width;

/// Text shown by a container that has not received a size yet.
pub const DEFAULT_PLACEHOLDER: &str = "waiting for size information";

/// Configuration for rendering a layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Pads short lines and missing rows of a leaf.
    pub fill: char,
    /// Column drawn between horizontally arranged children.
    pub horizontal_separator: char,
    /// Repeated across the width between vertically stacked children.
    pub vertical_separator: char,
    /// Output of a container that has not been sized yet.
    pub placeholder: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fill: ' ',
            horizontal_separator: '|',
            vertical_separator: '-',
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Use box-drawing separators (`│` and `─`).
    #[must_use]
    pub fn box_drawing() -> Self {
        Self {
            horizontal_separator: '│',
            vertical_separator: '─',
            ..Self::default()
        }
    }

    /// Set the fill character.
    #[must_use]
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Set both separator characters.
    #[must_use]
    pub fn with_separators(mut self, horizontal: char, vertical: char) -> Self {
        self.horizontal_separator = horizontal;
        self.vertical_separator = vertical;
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Check that every fill and separator character is exactly one column wide.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (what, c) in [
            ("fill", self.fill),
            ("horizontal separator", self.horizontal_separator),
            ("vertical separator", self.vertical_separator),
        ] {
            let width = display_width(c.encode_utf8(&mut [0; 4]));
            if width != 1 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{what} {c:?} is {width} columns wide, must be 1"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::box_drawing().validate().is_ok());
    }

    #[test]
    fn test_wide_fill_rejected() {
        let config = LayoutConfig::default().with_fill('日');
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_width_separator_rejected() {
        let config = LayoutConfig::default().with_separators('\u{200B}', '-');
        assert!(matches!(config.validate(), Err(LayoutError::InvalidConfig(_))));
    }
}
