//! Display width and width-bounded truncation.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::ansi::strip_ansi;

/// Number of terminal columns `line` occupies once escape sequences are removed.
#[inline]
pub fn display_width(line: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(line).as_ref())
}

/// Cut `line` down to at most `max` columns without splitting a grapheme.
///
/// Lines that already fit are returned untouched, styling included. Lines
/// that need cutting lose their escape sequences.
pub fn truncate_to_width(line: &str, max: usize) -> Cow<'_, str> {
    if display_width(line) <= max {
        return Cow::Borrowed(line);
    }

    let plain = strip_ansi(line);
    let mut out = String::with_capacity(plain.len());
    let mut used = 0;
    for grapheme in plain.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > max {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    Cow::Owned(out)
}
