//! Node: the layout tree.
//!
//! A tree is made of [`Leaf`]s, each wrapping one [`Content`], and
//! [`Internal`] nodes that split their extent among their children. Every
//! node owns its children outright; removing a node from `children` drops
//! its whole subtree.
//!
//! ```text
//! Internal (vertical, border)
//! ├── Leaf("status")
//! ├── Internal (horizontal)
//! │   ├── Leaf("files")
//! │   └── Leaf("editor")
//! └── Leaf("log")
//! ```

use std::fmt;

use super::distribute::SizeFn;
use super::extent::Orientation;
use crate::error::LayoutError;
use crate::widget::Content;

/// A node of the layout tree.
pub enum Node {
    /// Wraps one content.
    Leaf(Leaf),
    /// Splits its extent among its children.
    Internal(Internal),
}

/// A named leaf wrapping a content.
pub struct Leaf {
    name: String,
    content: Box<dyn Content>,
    hidden: bool,
}

/// A node that arranges its children along one axis.
pub struct Internal {
    name: String,
    children: Vec<Node>,
    orientation: Orientation,
    border: bool,
    size_fn: Option<SizeFn>,
    hidden: bool,
}

impl Leaf {
    /// Create a leaf. The name must not be empty.
    pub fn new(name: impl Into<String>, content: Box<dyn Content>) -> Result<Self, LayoutError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LayoutError::EmptyLeafName);
        }
        Ok(Self {
            name,
            content,
            hidden: false,
        })
    }

    /// The leaf's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped content.
    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }

    /// The wrapped content, mutably.
    pub fn content_mut(&mut self) -> &mut dyn Content {
        self.content.as_mut()
    }

    /// Swap in a new content, returning the old one.
    pub fn replace_content(&mut self, content: Box<dyn Content>) -> Box<dyn Content> {
        std::mem::replace(&mut self.content, content)
    }
}

impl Internal {
    /// Create an internal node with the given orientation.
    pub fn new(orientation: Orientation, children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            name: String::new(),
            children: children.into_iter().collect(),
            orientation,
            border: false,
            size_fn: None,
            hidden: false,
        }
    }

    /// Children placed left-to-right.
    pub fn horizontal(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(Orientation::Horizontal, children)
    }

    /// Children stacked top-to-bottom.
    pub fn vertical(children: impl IntoIterator<Item = Node>) -> Self {
        Self::new(Orientation::Vertical, children)
    }

    /// Set a name (only used in error messages).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Draw separators between children.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Replace the even split with a custom size function.
    #[must_use]
    pub fn with_size_fn<F>(mut self, size_fn: F) -> Self
    where
        F: Fn(&Self, u16) -> Vec<u16> + 'static,
    {
        self.size_fn = Some(Box::new(size_fn));
        self
    }

    /// The node's name (may be empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Split direction.
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether separators are drawn between children.
    pub const fn has_border(&self) -> bool {
        self.border
    }

    /// Enable or disable separators.
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Install or remove a custom size function.
    pub fn set_size_fn(&mut self, size_fn: Option<SizeFn>) {
        self.size_fn = size_fn;
    }

    pub(crate) fn size_fn(&self) -> Option<&SizeFn> {
        self.size_fn.as_ref()
    }

    /// All children, hidden ones included, in display order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// All children, mutably.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Children that take part in layout, in display order.
    pub fn visible_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| !c.is_hidden())
    }

    /// Number of children that take part in layout.
    pub fn visible_count(&self) -> usize {
        self.visible_children().count()
    }
}

impl Node {
    /// Create a leaf node. Fails if `name` is empty.
    pub fn leaf(name: impl Into<String>, content: impl Content) -> Result<Self, LayoutError> {
        Leaf::new(name, Box::new(content)).map(Self::Leaf)
    }

    /// Create a horizontal node with default settings.
    pub fn horizontal(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Internal(Internal::horizontal(children))
    }

    /// Create a vertical node with default settings.
    pub fn vertical(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Internal(Internal::vertical(children))
    }

    /// Set the hidden flag.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.set_hidden(hidden);
        self
    }

    /// The node's name. Empty for unnamed internal nodes.
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.name,
            Self::Internal(node) => &node.name,
        }
    }

    /// Whether this is a leaf.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Whether the node is excluded from layout.
    pub const fn is_hidden(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.hidden,
            Self::Internal(node) => node.hidden,
        }
    }

    /// Include or exclude the node (and its subtree) from layout.
    pub fn set_hidden(&mut self, hidden: bool) {
        match self {
            Self::Leaf(leaf) => leaf.hidden = hidden,
            Self::Internal(node) => node.hidden = hidden,
        }
    }

    /// Children in display order; empty for leaves.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Internal(node) => &node.children,
        }
    }

    /// Children of an internal node, mutably.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal(node) => Some(&mut node.children),
        }
    }

    /// The content of a leaf.
    pub fn content(&self) -> Option<&dyn Content> {
        match self {
            Self::Leaf(leaf) => Some(leaf.content()),
            Self::Internal(_) => None,
        }
    }

    /// The content of a leaf, mutably.
    pub fn content_mut(&mut self) -> Option<&mut dyn Content> {
        match self {
            Self::Leaf(leaf) => Some(leaf.content_mut()),
            Self::Internal(_) => None,
        }
    }

    /// Names of all leaves below (and including) this node, in pre-order.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_leaf_names(&mut names);
        names
    }

    fn collect_leaf_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf(leaf) => out.push(&leaf.name),
            Self::Internal(node) => {
                for child in &node.children {
                    child.collect_leaf_names(out);
                }
            }
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Internal> for Node {
    fn from(node: Internal) -> Self {
        Self::Internal(node)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => leaf.fmt(f),
            Self::Internal(node) => node.fmt(f),
        }
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Internal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Internal")
            .field("name", &self.name)
            .field("orientation", &self.orientation)
            .field("border", &self.border)
            .field("custom_size", &self.size_fn.is_some())
            .field("hidden", &self.hidden)
            .field("children", &self.children)
            .finish()
    }
}
