//! Status Bar: Three-section status line.
//!
//! A single line with left, center, and right sections. Commonly used as
//! the top or bottom leaf of a vertical layout with a one-row size function.

use super::traits::Content;
use crate::measure::{display_width, truncate_to_width};

/// A three-section status line (left, center, right).
///
/// Each section gets at most a third of the width and is cut at a grapheme
/// boundary if it is longer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    /// Left section content.
    left: String,
    /// Center section content.
    center: String,
    /// Right section content.
    right: String,
    /// Assigned width.
    width: u16,
    /// Assigned height.
    height: u16,
}

impl StatusBar {
    /// Create an empty status bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    /// Set the center section content.
    pub fn set_center(&mut self, text: impl Into<String>) {
        self.center = text.into();
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    /// Set all sections at once.
    pub fn set_all(&mut self, left: impl Into<String>, center: impl Into<String>, right: impl Into<String>) {
        self.left = left.into();
        self.center = center.into();
        self.right = right.into();
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the center section content.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Compose the three sections into one line of `width` columns.
    fn compose(&self, width: usize) -> String {
        let third = width / 3;
        let left = truncate_to_width(&self.left, third);
        let center = truncate_to_width(&self.center, third);
        let right = truncate_to_width(&self.right, third);

        let left_width = display_width(&left);
        let center_width = display_width(&center);
        let right_width = display_width(&right);

        let center_start = (width - center_width) / 2;
        let right_start = width - right_width;

        let mut line = String::with_capacity(width);
        line.push_str(&left);
        pad(&mut line, center_start.saturating_sub(left_width));
        line.push_str(&center);
        pad(&mut line, right_start.saturating_sub(center_start + center_width));
        line.push_str(&right);
        line
    }
}

fn pad(line: &mut String, n: usize) {
    line.extend(std::iter::repeat(' ').take(n));
}

impl Content for StatusBar {
    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn lines(&self) -> Vec<String> {
        if self.height == 0 {
            return Vec::new();
        }
        vec![self.compose(usize::from(self.width))]
    }
}
