use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{LightKey, NodeHandle};

/// A scene node: hierarchy, transform, and optional component slots.
///
/// Nodes form a tree through parent/child relationships and only hold the
/// data the update loop touches every frame. Renderable payloads
/// (geometry, materials) live with the host renderer; the node is the
/// opaque animation target the engine is allowed to mutate.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name, used for lookups and diagnostics.
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data accessed every frame).
    pub transform: Transform,

    /// Light component, if this node carries one.
    pub light: Option<LightKey>,

    /// Visibility flag for the host renderer.
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            light: None,
            visible: true,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// World transformation matrix, refreshed by the scene each frame.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
