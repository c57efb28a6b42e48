//! # Boxer
//!
//! A box-model layout engine for terminal interfaces.
//!
//! Boxer arranges independently rendering components into one rectangular
//! grid of text. A tree of nodes describes how the screen is split; each
//! leaf wraps a [`Content`] that renders itself as lines of text.
//!
//! ## Core Concepts
//!
//! - **Layout tree**: [`Node`]s are either leaves or internal nodes that
//!   stack their children vertically or arrange them horizontally
//! - **Size distribution**: even split by default, or a custom [`SizeFn`]
//!   whose result is checked before use
//! - **Exact rectangles**: every render of a node yields exactly the
//!   requested number of lines, each exactly the requested width
//! - **Positional errors**: failures deep in the tree report the path to the
//!   node that caused them
//!
//! ## Example
//!
//! ```rust
//! use boxer::{Boxer, Internal, Node, Text};
//!
//! let mut boxer = Boxer::new();
//! let root = Internal::horizontal([
//!     boxer.create_leaf("left", Text::new("left")).unwrap(),
//!     boxer.create_leaf("right", Text::new("right")).unwrap(),
//! ])
//! .with_border(true);
//! boxer.set_root(root.into());
//!
//! boxer.resize(11, 1);
//! assert_eq!(boxer.view(), "left |right");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod widget;

// Re-exports for convenience
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{Boxer, Extent, Internal, Leaf, Node, Orientation, SizeFn};
pub use measure::display_width;
pub use widget::{Content, LogView, StatusBar, Text};
