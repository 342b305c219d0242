//! Scene graph module.
//!
//! A data-only scene graph: the engine owns hierarchy, transforms and
//! light parameters, never geometry or material data. Rendering consumes
//! this structure from the outside.
//!
//! - [`Node`]: scene node (parent/child relations and a transform)
//! - [`Transform`]: TRS component with cached matrices
//! - [`Scene`]: scene container and component pools
//! - [`Light`]: light component
//! - [`Environment`]: ambient light, background and fog

pub mod environment;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use environment::{Environment, Fog};
pub use light::{Light, LightKind, ShadowConfig};
pub use node::Node;
pub use scene::{NodeBuilder, Scene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] in a scene's node arena.
    pub struct NodeHandle;
    /// Key into a scene's light component pool.
    pub struct LightKey;
}
