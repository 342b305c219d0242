//! Transform system.
//!
//! Propagates world matrices through the node hierarchy. Decoupled from
//! [`Scene`](crate::scene::Scene): it only borrows the node arena and the
//! root list, which keeps the per-frame update free of borrow conflicts.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates world matrices for the whole hierarchy.
///
/// Uses an explicit work stack instead of recursion so deep hierarchies
/// cannot overflow the call stack. A node's world matrix is recomputed
/// only when its own local matrix or any ancestor's world matrix changed.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    // Work stack: (node handle, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    while let Some((node_handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        let current_world = node.transform.world_matrix;
        let children_count = node.children.len();

        // Push children in reverse to preserve traversal order.
        for i in (0..children_count).rev() {
            if let Some(node) = nodes.get(node_handle)
                && let Some(&child_handle) = node.children.get(i)
            {
                stack.push((child_handle, current_world, world_needs_update));
            }
        }
    }
}
