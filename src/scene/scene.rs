use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;
use slotmap::SlotMap;

use crate::scene::environment::Environment;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform_system;
use crate::scene::{LightKey, NodeHandle};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Scene graph container.
///
/// `Scene` is a pure data layer: the node hierarchy plus component pools.
/// It owns no geometry or material data — renderable payloads belong to
/// the host. One scene at a time is active inside
/// [`Engine`](crate::engine::Engine); tearing a scene down is a whole-value
/// replace, which is what makes scene reloads atomic.
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    // ==== Component pools ====
    pub lights: SlotMap<LightKey, Light>,

    // Global settings
    pub environment: Environment,

    /// The node the host renders from; settings export reads its position.
    pub active_camera: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),

            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            lights: SlotMap::with_key(),

            environment: Environment::new(),
            active_camera: None,
        }
    }

    /// Starts building a node with a fluent API.
    pub fn build_node(&'_ mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Adds a node as a root of the scene.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node under an existing parent.
    pub fn add_to_parent(&mut self, child: Node, parent_handle: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent_handle);
        }

        handle
    }

    /// Removes a node and, recursively, all of its children. Components
    /// owned by removed nodes are released from their pools.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        // Take the children list first to avoid borrow conflicts.
        let children = if let Some(node) = self.nodes.get(handle) {
            node.children.clone()
        } else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        // Detach from parent or root list.
        let parent_opt = self.nodes.get(handle).and_then(|n| n.parent);

        if let Some(parent_handle) = parent_opt {
            if let Some(parent) = self.nodes.get_mut(parent_handle)
                && let Some(pos) = parent.children.iter().position(|&x| x == handle)
            {
                parent.children.remove(pos);
            }
        } else if let Some(pos) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(pos);
        }

        // Release components.
        if let Some(node) = self.nodes.get(handle)
            && let Some(light_key) = node.light
        {
            self.lights.remove(light_key);
        }

        self.nodes.remove(handle);
    }

    /// Re-parents `child_handle` under `parent_handle`.
    pub fn attach(&mut self, child_handle: NodeHandle, parent_handle: NodeHandle) {
        if child_handle == parent_handle {
            log::warn!("Cannot attach node to itself!");
            return;
        }

        // 1. Detach from old parent or root list.
        let old_parent = self.nodes.get(child_handle).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child_handle)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child_handle) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new parent.
        if let Some(p) = self.nodes.get_mut(parent_handle) {
            p.children.push(child_handle);
        } else {
            log::error!("Parent node not found during attach!");
            // Keep the child reachable rather than losing it.
            self.root_nodes.push(child_handle);
            return;
        }

        // 3. Update the child.
        if let Some(c) = self.nodes.get_mut(child_handle) {
            c.parent = Some(parent_handle);
            c.transform.mark_dirty();
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Whether `handle` refers to a live node of this scene.
    #[must_use]
    pub fn contains_node(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    /// Finds the first node with the given name.
    #[must_use]
    pub fn find_node(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    // ========================================================================
    // Component queries
    // ========================================================================

    /// The light carried by `handle`, if any.
    #[must_use]
    pub fn light_of(&self, handle: NodeHandle) -> Option<&Light> {
        let key = self.nodes.get(handle)?.light?;
        self.lights.get(key)
    }

    /// Mutable access to the light carried by `handle`.
    pub fn light_of_mut(&mut self, handle: NodeHandle) -> Option<&mut Light> {
        let key = self.nodes.get(handle)?.light?;
        self.lights.get_mut(key)
    }

    /// Iterates all lights together with their carrying node.
    pub fn iter_lights(&self) -> impl Iterator<Item = (&Node, &Light)> {
        self.nodes.values().filter_map(|node| {
            let key = node.light?;
            self.lights.get(key).map(|light| (node, light))
        })
    }

    // ========================================================================
    // Component insertion
    // ========================================================================

    /// Creates a node carrying `light` at the scene root.
    pub fn add_light(&mut self, name: &str, light: Light) -> NodeHandle {
        let mut node = Node::new(name);
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Creates a node carrying `light` under `parent`.
    pub fn add_light_to_parent(
        &mut self,
        name: &str,
        light: Light,
        parent: NodeHandle,
    ) -> NodeHandle {
        let mut node = Node::new(name);
        node.light = Some(self.lights.insert(light));
        self.add_to_parent(node, parent)
    }

    /// Creates the camera node and marks it active.
    pub fn add_camera(&mut self, position: Vec3) -> NodeHandle {
        let mut node = Node::new("Camera");
        node.transform.position = position;
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
        let handle = self.add_node(node);
        self.active_camera = Some(handle);
        handle
    }

    // ========================================================================
    // Per-frame matrix pipeline
    // ========================================================================

    /// Updates world matrices for the whole scene. Called once per tick,
    /// after the animators have written local transforms.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }
}

/// Fluent construction of a [`Node`].
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::new(name),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_rotation_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.set_rotation_euler(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attaches a light component to the node being built.
    #[must_use]
    pub fn with_light(mut self, light: Light) -> Self {
        self.node.light = Some(self.scene.lights.insert(light));
        self
    }

    /// Inserts the node into the scene and returns its handle.
    pub fn build(self) -> NodeHandle {
        let handle = self.scene.nodes.insert(self.node);

        if let Some(parent_handle) = self.parent {
            self.scene.attach(handle, parent_handle);
        } else {
            self.scene.root_nodes.push(handle);
        }

        handle
    }
}
