//! Log view: Ring buffer of lines shown tail-first.
//!
//! Keeps at most `max_lines` lines, discarding the oldest. When rendered it
//! shows as many of the newest lines as fit the assigned height (or older
//! ones when scrolled up), each cut to the assigned width.

use std::collections::VecDeque;

use super::traits::Content;
use crate::measure::truncate_to_width;

/// Scrollable, bounded log of text lines.
#[derive(Debug, Clone)]
pub struct LogView {
    /// Stored lines, oldest first.
    lines: VecDeque<String>,
    /// Maximum number of lines to retain.
    max_lines: usize,
    /// Current scroll offset from the bottom (0 = at bottom).
    scroll_offset: usize,
    /// Assigned width.
    width: u16,
    /// Assigned height.
    height: u16,
}

impl LogView {
    /// Create a log view keeping at most `max_lines` lines.
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines: max_lines.max(1),
            scroll_offset: 0,
            width: 0,
            height: 0,
        }
    }

    /// Get the total number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append text; embedded newlines start new lines.
    pub fn push(&mut self, text: &str) {
        for line in text.split('\n') {
            // Trim excess lines if at capacity
            while self.lines.len() >= self.max_lines {
                self.lines.pop_front();
            }
            self.lines.push_back(line.to_string());
        }
    }

    /// Get a line by index from the oldest stored line.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Lines visible in a viewport of `height` rows, oldest first.
    pub fn visible_lines(&self, height: usize) -> impl Iterator<Item = &str> {
        let end = self.lines.len().saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(height);
        self.lines.range(start..end).map(String::as_str)
    }

    /// Scroll up by the given number of lines.
    pub fn scroll_up(&mut self, lines: usize) {
        let max_offset = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max_offset);
    }

    /// Scroll down by the given number of lines.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll to the bottom (latest content).
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Check if we're scrolled to the bottom.
    pub const fn at_bottom(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Clear all content.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0;
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Content for LogView {
    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    fn lines(&self) -> Vec<String> {
        let width = usize::from(self.width);
        self.visible_lines(usize::from(self.height))
            .map(|line| truncate_to_width(line, width).into_owned())
            .collect()
    }
}
