//! Demo scene definitions.
//!
//! Each scene is a named construction routine: it populates a fresh
//! [`Scene`] with nodes and lights and registers the animators that drive
//! them. The engine looks routines up by name in a [`SceneLibrary`]; hosts
//! can insert their own.
//!
//! Builders run against a [`SceneContext`], which couples the scene under
//! construction with the animator registry (so registrations are
//! validated) and the spawn RNG (so per-instance jitter is reproducible
//! under a fixed seed).

pub mod basic;
pub mod haunted;
pub mod materials;
pub mod shadows;

use glam::Vec3;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

use crate::animation::{AnimatorId, AnimatorRegistry, AnimatorSpec};
use crate::errors::Result;
use crate::scene::{NodeHandle, Scene};

/// Scene loaded when a requested name is unknown.
pub const DEFAULT_SCENE: &str = "basic";

/// Construction context handed to scene builders.
pub struct SceneContext<'a> {
    /// The scene being populated.
    pub scene: &'a mut Scene,
    registry: &'a mut AnimatorRegistry,
    rng: &'a mut StdRng,
}

impl<'a> SceneContext<'a> {
    pub(crate) fn new(
        scene: &'a mut Scene,
        registry: &'a mut AnimatorRegistry,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            scene,
            registry,
            rng,
        }
    }

    /// Registers an animator against the scene under construction.
    pub fn register(&mut self, target: NodeHandle, spec: AnimatorSpec) -> Result<AnimatorId> {
        self.registry.register(self.scene, target, spec)
    }

    /// Spawn-time random source. Parameters drawn here are fixed for the
    /// lifetime of the spawned instance.
    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }

    /// Number of animators registered so far (across the whole load).
    #[must_use]
    pub fn animator_count(&self) -> usize {
        self.registry.len()
    }
}

/// A named scene construction routine.
pub type SceneBuilder = fn(&mut SceneContext<'_>) -> Result<()>;

struct SceneEntry {
    title: &'static str,
    builder: SceneBuilder,
}

/// Name-keyed collection of scene builders.
pub struct SceneLibrary {
    entries: FxHashMap<&'static str, SceneEntry>,
}

impl SceneLibrary {
    /// An empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// The four demo scenes.
    #[must_use]
    pub fn with_demo_scenes() -> Self {
        let mut library = Self::new();
        library.insert("basic", "Basic Lighting Demo", basic::build);
        library.insert("shadows", "Shadows Showcase", shadows::build);
        library.insert("haunted", "Haunted House", haunted::build);
        library.insert("materials", "Material Explorer", materials::build);
        library
    }

    pub fn insert(&mut self, name: &'static str, title: &'static str, builder: SceneBuilder) {
        self.entries.insert(name, SceneEntry { title, builder });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<SceneBuilder> {
        self.entries.get(name).map(|entry| entry.builder)
    }

    /// Human-readable title for a scene name.
    #[must_use]
    pub fn title(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|entry| entry.title)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for SceneLibrary {
    fn default() -> Self {
        Self::with_demo_scenes()
    }
}

/// Converts a packed `0xRRGGBB` color to linear-ish float RGB.
pub(crate) fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
