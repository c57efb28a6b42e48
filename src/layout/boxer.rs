//! Boxer: the root holder a host application talks to.
//!
//! The host feeds it resize notices and asks it for the current rendering.
//! Everything in between (distribution, resizing leaves, composition) happens
//! inside one synchronous call to [`Boxer::try_view`] or [`Boxer::view`].

use std::collections::HashSet;

use crossterm::event::Event;

use super::editor;
use super::extent::Extent;
use super::node::Node;
use super::render::render;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::measure::truncate_to_width;
use crate::widget::Content;

/// Owns a layout tree and the last known viewport extent.
#[derive(Debug, Default)]
pub struct Boxer {
    /// The layout tree.
    root: Option<Node>,
    /// Last extent received; zero until the first resize.
    extent: Extent,
    /// Rendering configuration.
    config: LayoutConfig,
    /// Names handed out by [`Boxer::create_leaf`].
    names: HashSet<String>,
}

impl Boxer {
    /// Create an empty container with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container holding `root`.
    pub fn with_root(root: Node) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }

    /// Create an empty container with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if the configuration cannot
    /// produce exact rectangles.
    pub fn with_config(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Create a leaf whose name is unique within this container.
    ///
    /// # Errors
    ///
    /// Fails if `name` is empty, was handed out before, or names a leaf in
    /// the current tree. A handed-out name stays taken until a tree without
    /// it is installed with [`Boxer::set_root`].
    pub fn create_leaf(
        &mut self,
        name: impl Into<String>,
        content: impl Content,
    ) -> Result<Node, LayoutError> {
        let name = name.into();
        let in_tree = self
            .root
            .as_ref()
            .is_some_and(|root| editor::find_leaf(root, &name).is_some());
        if in_tree || self.names.contains(&name) {
            return Err(LayoutError::DuplicateLeafName { name });
        }

        let leaf = Node::leaf(name.clone(), content)?;
        log::debug!("registered leaf '{name}'");
        self.names.insert(name);
        Ok(leaf)
    }

    /// Install a layout tree, returning the previous one.
    ///
    /// Names handed out by [`Boxer::create_leaf`] that do not occur in the
    /// new tree become available again.
    pub fn set_root(&mut self, root: Node) -> Option<Node> {
        let in_tree: HashSet<&str> = root.leaf_names().into_iter().collect();
        let before = self.names.len();
        self.names.retain(|name| in_tree.contains(name.as_str()));
        let released = before - self.names.len();
        if released > 0 {
            log::debug!("released {released} leaf names not in the new tree");
        }
        self.root.replace(root)
    }

    /// The layout tree.
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// The layout tree, mutably.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    /// The rendering configuration.
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Last extent received.
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Whether a usable extent has been received.
    pub const fn is_sized(&self) -> bool {
        !self.extent.is_empty()
    }

    /// Record the viewport size used by the next render.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("viewport resized to {width}x{height}");
        self.extent = Extent::new(width, height);
    }

    /// Handle a terminal event.
    ///
    /// Resize events are consumed; everything else is left to the host.
    /// Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Resize(width, height) => {
                self.resize(width, height);
                true
            }
            _ => false,
        }
    }

    /// Render the tree at the last extent.
    ///
    /// Returns the placeholder text while no size has been received.
    pub fn try_view(&mut self) -> Result<String, LayoutError> {
        if !self.is_sized() {
            return Ok(self.config.placeholder.clone());
        }
        let root = self
            .root
            .as_mut()
            .ok_or_else(|| LayoutError::NoVisibleChildren {
                name: String::new(),
            })?;
        let lines = render(root, self.extent, &self.config)?;
        Ok(lines.join("\n"))
    }

    /// Render the tree at the last extent, showing layout errors as text.
    ///
    /// Hosts that cannot do anything useful with a [`LayoutError`] get the
    /// error message cut to the viewport width instead.
    pub fn view(&mut self) -> String {
        match self.try_view() {
            Ok(view) => view,
            Err(err) => {
                log::warn!("layout failed at {:?}: {err}", self.extent);
                let message = err.to_string();
                truncate_to_width(&message, usize::from(self.extent.width)).into_owned()
            }
        }
    }

    /// Apply `f` to every node of the tree, stopping at the first error.
    pub fn visit<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(&Node) -> Result<(), E>,
    {
        match &self.root {
            Some(root) => editor::visit(root, f),
            None => Ok(()),
        }
    }

    /// See [`editor::edit_content_by_name`].
    pub fn edit_content_by_name<E, F>(&mut self, name: &str, edit: F) -> Result<usize, E>
    where
        F: FnMut(&dyn Content) -> Result<Box<dyn Content>, E>,
    {
        match &mut self.root {
            Some(root) => editor::edit_content_by_name(root, name, edit),
            None => Ok(0),
        }
    }

    /// See [`editor::edit_typed_by_name`].
    pub fn edit_typed_by_name<T, E, F>(&mut self, name: &str, edit: F) -> Result<usize, E>
    where
        T: Content + Clone,
        F: FnMut(T) -> Result<T, E>,
    {
        match &mut self.root {
            Some(root) => editor::edit_typed_by_name(root, name, edit),
            None => Ok(0),
        }
    }
}
