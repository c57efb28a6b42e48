//! Printable width measurement for terminal text.
//!
//! Lines handed to the layout engine may carry ANSI styling; only the
//! printable part counts towards a line's width. Widths follow Unicode East
//! Asian Width (`unicode-width`), so CJK ideographs take two columns and
//! combining marks take none.

mod ansi;
mod width;

pub use ansi::strip_ansi;
pub use width::{display_width, truncate_to_width};
