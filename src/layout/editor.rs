//! Tree editing: find and change nodes by walking the whole tree.
//!
//! All walks are depth-first and pre-order (a parent before its children,
//! children in display order). Hidden nodes are visited like any other. A
//! callback error stops the walk and is returned unchanged.

use super::node::{Leaf, Node};
use crate::widget::Content;

/// Apply `f` to every node, stopping at the first error.
pub fn visit<'a, E, F>(node: &'a Node, mut f: F) -> Result<(), E>
where
    F: FnMut(&'a Node) -> Result<(), E>,
{
    walk(node, &mut f)
}

fn walk<'a, E, F>(node: &'a Node, f: &mut F) -> Result<(), E>
where
    F: FnMut(&'a Node) -> Result<(), E>,
{
    f(node)?;
    for child in node.children() {
        walk(child, f)?;
    }
    Ok(())
}

/// Apply `f` to every node mutably, stopping at the first error.
///
/// Children are walked after `f` has seen their parent, so changes `f` makes
/// to a node's children are reflected in the rest of the walk.
pub fn visit_mut<E, F>(node: &mut Node, mut f: F) -> Result<(), E>
where
    F: FnMut(&mut Node) -> Result<(), E>,
{
    walk_mut(node, &mut f)
}

fn walk_mut<E, F>(node: &mut Node, f: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Node) -> Result<(), E>,
{
    f(node)?;
    if let Some(children) = node.children_mut() {
        for child in children {
            walk_mut(child, f)?;
        }
    }
    Ok(())
}

/// First leaf named `name`, in pre-order.
pub fn find_leaf<'a>(node: &'a Node, name: &str) -> Option<&'a Leaf> {
    match node {
        Node::Leaf(leaf) => (leaf.name() == name).then_some(leaf),
        Node::Internal(internal) => internal
            .children()
            .iter()
            .find_map(|child| find_leaf(child, name)),
    }
}

/// First leaf named `name`, in pre-order, mutably.
pub fn find_leaf_mut<'a>(node: &'a mut Node, name: &str) -> Option<&'a mut Leaf> {
    match node {
        Node::Leaf(leaf) => (leaf.name() == name).then_some(leaf),
        Node::Internal(internal) => internal
            .children_mut()
            .iter_mut()
            .find_map(|child| find_leaf_mut(child, name)),
    }
}

/// Replace the content of every leaf named `name` with what `edit` builds from it.
///
/// `edit` sees the current content and returns its replacement. Replacements
/// are built for every matching leaf first and stored only if all of them
/// succeed; on the first error the tree is left exactly as it was and the
/// error is returned. Returns the number of leaves edited.
pub fn edit_content_by_name<E, F>(root: &mut Node, name: &str, mut edit: F) -> Result<usize, E>
where
    F: FnMut(&dyn Content) -> Result<Box<dyn Content>, E>,
{
    let mut replacements = Vec::new();
    visit(&*root, |node| -> Result<(), E> {
        if let Node::Leaf(leaf) = node {
            if leaf.name() == name {
                replacements.push(edit(leaf.content())?);
            }
        }
        Ok(())
    })?;

    let edited = replacements.len();
    let mut replacements = replacements.into_iter();
    for_each_leaf_named(root, name, &mut |leaf| {
        if let Some(replacement) = replacements.next() {
            leaf.replace_content(replacement);
        }
    });
    log::trace!("edited {edited} leaves named '{name}'");
    Ok(edited)
}

/// Edit every leaf named `name` whose content is a `T`.
///
/// `edit` works on copies. The copies are stored back only if `edit`
/// succeeds for every matching leaf; otherwise nothing changes. Leaves with
/// that name but a different content type are left alone. Returns the number
/// of leaves edited.
pub fn edit_typed_by_name<T, E, F>(root: &mut Node, name: &str, mut edit: F) -> Result<usize, E>
where
    T: Content + Clone,
    F: FnMut(T) -> Result<T, E>,
{
    let mut updates = Vec::new();
    visit(&*root, |node| -> Result<(), E> {
        if let Node::Leaf(leaf) = node {
            if leaf.name() == name {
                if let Some(current) = leaf.content().downcast_ref::<T>() {
                    updates.push(edit(current.clone())?);
                }
            }
        }
        Ok(())
    })?;

    let edited = updates.len();
    let mut updates = updates.into_iter();
    for_each_leaf_named(root, name, &mut |leaf| {
        if let Some(current) = leaf.content_mut().downcast_mut::<T>() {
            if let Some(update) = updates.next() {
                *current = update;
            }
        }
    });
    Ok(edited)
}

/// Pre-order walk over the leaves named `name`.
fn for_each_leaf_named(node: &mut Node, name: &str, f: &mut impl FnMut(&mut Leaf)) {
    match node {
        Node::Leaf(leaf) if leaf.name() == name => f(leaf),
        Node::Leaf(_) => {}
        Node::Internal(internal) => {
            for child in internal.children_mut() {
                for_each_leaf_named(child, name, f);
            }
        }
    }
}
