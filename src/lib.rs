pub mod animation;
pub mod engine;
pub mod errors;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod utils;

pub use animation::{
    AnimatorId, AnimatorRegistry, AnimatorSpec, FlickerSpec, HeightMotion, OrbitSpec, PulseSpec,
    SpinSpec, WingSpec, WobbleSpec,
};
pub use engine::Engine;
pub use errors::{Result, WispError};
pub use scene::{Environment, Fog, Light, LightKey, LightKind, Node, NodeHandle, Scene, Transform};
pub use scenes::{DEFAULT_SCENE, SceneContext, SceneLibrary};
pub use settings::Settings;
pub use utils::time::Timer;
