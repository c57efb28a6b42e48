//! Layout module: the node tree, size distribution, rendering and editing.
//!
//! A [`Boxer`] owns a tree of [`Node`]s. On every render the tree is walked
//! top-down: internal nodes split their extent among visible children,
//! leaves render their content, and the results are glued back together
//! bottom-up into one block of exactly the requested size.

mod boxer;
mod distribute;
pub mod editor;
mod extent;
mod node;
mod render;

pub use boxer::Boxer;
pub use distribute::{distribute, even_split, SizeFn};
pub use editor::{edit_content_by_name, edit_typed_by_name, find_leaf, find_leaf_mut, visit, visit_mut};
pub use extent::{Extent, Orientation};
pub use node::{Internal, Leaf, Node};
pub use render::render;
