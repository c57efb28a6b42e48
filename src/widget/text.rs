//! Text: a fixed block of lines.

use super::traits::Content;
use crate::layout::Extent;

/// Static text content.
///
/// Displays its lines unchanged; the engine reports an error if they do not
/// fit the assigned extent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    /// Lines to display.
    lines: Vec<String>,
    /// Last extent received.
    extent: Extent,
}

impl Text {
    /// Create text content, splitting on newlines.
    pub fn new(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_string))
    }

    /// Create text content from individual lines.
    pub fn from_lines(lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            extent: Extent::ZERO,
        }
    }

    /// Replace the text.
    pub fn set(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
    }

    /// Append one line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Extent of the last render pass (zero before the first).
    pub const fn extent(&self) -> Extent {
        self.extent
    }
}

impl Content for Text {
    fn resize(&mut self, width: u16, height: u16) {
        self.extent = Extent::new(width, height);
    }

    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}
