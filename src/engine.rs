//! Engine core module.
//!
//! [`Engine`] is the single controller owning the active scene slot, the
//! animator registry, the scene library and the spawn RNG. It has no
//! window, renderer or clock of its own: a host render loop calls
//! [`Engine::tick`] once per display frame with elapsed seconds from its
//! own timer.
//!
//! # Lifecycle
//!
//! The scene slot moves `Empty → Populated → Empty → …`. A load is an
//! atomic handoff: the outgoing scene and every animator bound to it are
//! discarded before the incoming scene's construction begins, so stale
//! and fresh animators can never run in the same frame. `tick` while
//! `Empty` is a no-op.
//!
//! # Example
//!
//! ```rust,ignore
//! use wisp::Engine;
//!
//! let mut engine = Engine::new();
//! engine.load_scene("haunted")?;
//!
//! // Host render loop
//! loop {
//!     engine.tick(timer.elapsed_seconds());
//!     // ... draw the scene ...
//! }
//! ```

use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::{AnimatorId, AnimatorRegistry, AnimatorSpec};
use crate::errors::{Result, WispError};
use crate::scene::{NodeHandle, Scene};
use crate::scenes::{DEFAULT_SCENE, SceneBuilder, SceneContext, SceneLibrary};
use crate::settings::Settings;

/// The animation update engine.
pub struct Engine {
    scene: Option<Scene>,
    registry: AnimatorRegistry,
    library: SceneLibrary,
    /// Spawn-time random source handed to scene builders.
    rng: StdRng,

    current_scene: Option<String>,
    time: f32,
    frame_count: u64,
}

impl Engine {
    const DEFAULT_SEED: u64 = 0xD1CE;

    /// Creates an engine with the demo scene library and a fixed default
    /// seed. The scene slot starts `Empty`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Creates an engine whose spawn jitter and flicker randomness derive
    /// from `seed`, for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scene: None,
            registry: AnimatorRegistry::with_seed(seed),
            library: SceneLibrary::with_demo_scenes(),
            rng: StdRng::seed_from_u64(seed),
            current_scene: None,
            time: 0.0,
            frame_count: 0,
        }
    }

    // ========================================================================
    // Frame update
    // ========================================================================

    /// Advances every registered animator to `elapsed_seconds` (monotonic
    /// from engine start) and refreshes world matrices.
    ///
    /// A no-op while no scene is loaded. Never fails: animator specs are
    /// validated at registration, not here.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.time = elapsed_seconds;
        self.frame_count += 1;

        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        self.registry.update(elapsed_seconds, scene);
        scene.update_matrix_world();
    }

    /// Elapsed time seen by the most recent tick.
    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Total number of ticks since creation.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ========================================================================
    // Scene lifecycle
    // ========================================================================

    /// Tears down the current scene and builds the named one.
    ///
    /// Unknown names load the default scene instead and return
    /// [`WispError::UnknownScene`] so the host can surface the bad name.
    /// A construction failure leaves the engine `Empty`.
    pub fn load_scene(&mut self, name: &str) -> Result<()> {
        let Some(builder) = self.library.get(name) else {
            log::warn!("Unknown scene {name:?}, falling back to {DEFAULT_SCENE:?}");
            if let Some(fallback) = self.library.get(DEFAULT_SCENE) {
                self.run_builder(DEFAULT_SCENE, fallback)?;
            }
            return Err(WispError::UnknownScene(name.to_string()));
        };
        self.run_builder(name, builder)
    }

    fn run_builder(&mut self, name: &str, builder: SceneBuilder) -> Result<()> {
        // Atomic handoff: the outgoing scene and its animators are gone
        // before construction starts.
        self.clear_scene();

        let mut scene = Scene::new();
        let mut ctx = SceneContext::new(&mut scene, &mut self.registry, &mut self.rng);

        match builder(&mut ctx) {
            Ok(()) => {
                log::info!(
                    "Loaded scene {name:?} ({} animators)",
                    self.registry.len()
                );
                self.scene = Some(scene);
                self.current_scene = Some(name.to_string());
                Ok(())
            }
            Err(err) => {
                // Do not run with partially-initialized animators.
                log::error!("Scene {name:?} failed to build: {err}");
                self.registry.clear();
                Err(err)
            }
        }
    }

    /// Discards the scene and every registered animator. Subsequent ticks
    /// are no-ops until the next load.
    pub fn clear_scene(&mut self) {
        self.registry.clear();
        self.scene = None;
        self.current_scene = None;
    }

    /// Name of the active scene, if one is loaded.
    #[must_use]
    pub fn current_scene_name(&self) -> Option<&str> {
        self.current_scene.as_deref()
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// The scene library; hosts may insert their own builders.
    #[must_use]
    pub fn library(&self) -> &SceneLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut SceneLibrary {
        &mut self.library
    }

    // ========================================================================
    // Animator registration
    // ========================================================================

    /// Registers an animator against the active scene.
    pub fn register_animator(
        &mut self,
        target: NodeHandle,
        spec: AnimatorSpec,
    ) -> Result<AnimatorId> {
        let scene = self.scene.as_ref().ok_or(WispError::NoActiveScene)?;
        self.registry.register(scene, target, spec)
    }

    /// Unregisters one animator. Returns whether it existed.
    pub fn remove_animator(&mut self, id: AnimatorId) -> bool {
        self.registry.remove(id)
    }

    /// Number of registered animators.
    #[must_use]
    pub fn animator_count(&self) -> usize {
        self.registry.len()
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Captures the current scene selection and camera pose.
    pub fn export_settings(&self) -> Result<Settings> {
        let name = self
            .current_scene
            .as_ref()
            .ok_or(WispError::NoActiveScene)?;
        let camera = self
            .scene
            .as_ref()
            .and_then(|scene| scene.active_camera.and_then(|cam| scene.get_node(cam)))
            .map(|node| node.transform.position.to_array());

        Ok(Settings {
            scene: name.clone(),
            camera,
        })
    }

    /// Captures current settings as pretty-printed JSON.
    pub fn export_settings_json(&self) -> Result<String> {
        self.export_settings()?.to_json()
    }

    /// Applies imported settings: re-selects the scene by name (rebuilding
    /// its animators from scratch) and re-poses the camera if a position
    /// was recorded.
    pub fn import_settings(&mut self, json: &str) -> Result<()> {
        let settings = Settings::from_json(json)?;
        self.apply_settings(&settings)
    }

    /// See [`import_settings`](Self::import_settings).
    pub fn apply_settings(&mut self, settings: &Settings) -> Result<()> {
        self.load_scene(&settings.scene)?;

        if let Some([x, y, z]) = settings.camera
            && let Some(scene) = self.scene.as_mut()
            && let Some(camera) = scene.active_camera
            && let Some(node) = scene.get_node_mut(camera)
        {
            node.transform.position = Vec3::new(x, y, z);
        }

        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
