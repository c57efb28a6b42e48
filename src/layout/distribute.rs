//! Size distribution along a node's split axis.
//!
//! By default the available extent is split evenly, with the remainder going
//! one cell at a time to the leading children. A node may instead carry a
//! [`SizeFn`]; its result is checked against the contract (one extent per
//! visible child, summing exactly to the input) before it is used.

use super::node::Internal;
use crate::error::LayoutError;

/// A custom size function.
///
/// Receives the node and the extent available along its split axis (after
/// separator cells have been reserved). Must return one extent per visible
/// child, in display order, summing exactly to the given extent. A zero
/// extent is allowed and leaves that child out of the rendering.
pub type SizeFn = Box<dyn Fn(&Internal, u16) -> Vec<u16>>;

/// Split `extent` evenly among `count` children.
///
/// Every child gets `extent / count`; the first `extent % count` children get
/// one extra cell.
pub fn even_split(count: usize, extent: u16) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let extent = usize::from(extent);
    let base = extent / count;
    let remainder = extent % count;
    (0..count)
        .map(|i| {
            let size = if i < remainder { base + 1 } else { base };
            // Never exceeds `extent`, which came from a u16.
            u16::try_from(size).unwrap_or(u16::MAX)
        })
        .collect()
}

/// Distribute `extent` among the visible children of `node`.
pub fn distribute(node: &Internal, extent: u16) -> Result<Vec<u16>, LayoutError> {
    let count = node.visible_count();
    if count == 0 {
        return Err(LayoutError::NoVisibleChildren {
            name: node.name().to_string(),
        });
    }

    let Some(size_fn) = node.size_fn() else {
        return Ok(even_split(count, extent));
    };

    let sizes = size_fn(node, extent);
    if sizes.len() != count {
        return Err(LayoutError::DistributionShape {
            name: node.name().to_string(),
            expected: count,
            actual: sizes.len(),
        });
    }
    let sum: u32 = sizes.iter().map(|&s| u32::from(s)).sum();
    if sum != u32::from(extent) {
        return Err(LayoutError::DistributionSum {
            name: node.name().to_string(),
            expected: u32::from(extent),
            actual: sum,
        });
    }
    Ok(sizes)
}

/// Reserve separator cells, distribute the rest, and settle unused separators.
///
/// Returns one extent per visible child. When a bordered node ends up with
/// zero-extent children, fewer separators are drawn than were reserved; the
/// spare cells go to the last child that is rendered.
pub(crate) fn allocate(node: &Internal, available: u16) -> Result<Vec<u16>, LayoutError> {
    let count = node.visible_count();
    let reserved = if node.has_border() && count >= 2 {
        u16::try_from(count - 1).unwrap_or(u16::MAX)
    } else {
        0
    };

    if reserved > 0 && available <= reserved {
        return Err(LayoutError::InsufficientSpace {
            name: node.name().to_string(),
            available,
            reserved,
        });
    }

    let mut sizes = distribute(node, available - reserved)?;
    log::trace!(
        "node '{}' ({}): {available} cells, {reserved} reserved -> {sizes:?}",
        node.name(),
        node.orientation(),
    );

    if reserved > 0 {
        let rendered = sizes.iter().filter(|&&s| s > 0).count();
        let drawn = u16::try_from(rendered.saturating_sub(1)).unwrap_or(u16::MAX);
        let spare = reserved - drawn;
        if spare > 0 {
            if let Some(last) = sizes.iter_mut().rev().find(|s| **s > 0) {
                *last += spare;
            }
        }
    }
    Ok(sizes)
}
