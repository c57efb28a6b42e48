//! ANSI escape sequence stripping.
//!
//! Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Strip ANSI escape sequences from a string.
///
/// Borrows when the input contains no ESC byte.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_sequence(bytes, i + 1);
        } else {
            // ESC is ASCII, so cutting at it never splits a UTF-8 sequence.
            let start = i;
            while i < bytes.len() && bytes[i] != ESC {
                i += 1;
            }
            out.push_str(&s[start..i]);
        }
    }

    Cow::Owned(out)
}

/// Index just past the sequence whose introducer byte is at `pos`.
fn skip_sequence(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        None => bytes.len(),
        Some(b'[') => skip_csi(bytes, pos + 1),
        Some(b']' | b'P' | b'^' | b'_') => skip_string(bytes, pos + 1),
        Some(_) => pos + 1,
    }
}

fn skip_csi(bytes: &[u8], mut i: usize) -> usize {
    while let Some(&b) = bytes.get(i) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            // Malformed; resume at the offending byte.
            return i;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string(bytes: &[u8], mut i: usize) -> usize {
    while let Some(&b) = bytes.get(i) {
        match b {
            BEL => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_borrows() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_strip_sgr() {
        assert_eq!(strip_ansi("\x1b[1;31mred\x1b[0m text"), "red text");
        assert_eq!(strip_ansi("\x1b[38;5;196mx\x1b[0m"), "x");
    }

    #[test]
    fn test_strip_osc_hyperlink() {
        let link = "\x1b]8;;https://example.com\x07link\x1b]8;;\x1b\\";
        assert_eq!(strip_ansi(link), "link");
    }

    #[test]
    fn test_strip_two_byte_and_trailing_esc() {
        assert_eq!(strip_ansi("a\x1b7b\x1b8c"), "abc");
        assert_eq!(strip_ansi("abc\x1b"), "abc");
    }
}
