//! Procedural animation module.
//!
//! Animators are closed-form functions of elapsed time bound to scene
//! nodes. Each frame the host hands the registry a monotonic time value;
//! the registry evaluates every animator in registration order and writes
//! the results straight into node transforms and light intensities.
//! Nothing here is keyframed, integrated or smoothed — re-evaluating at
//! the same instant always yields the same pose (flicker excepted, which
//! draws fresh randomness by design).

pub mod kinematics;
pub mod registry;
pub mod spec;

pub use registry::{AnimatorId, AnimatorRegistry};
pub use spec::{
    AnimatorSpec, FlickerSpec, HeightMotion, OrbitSpec, PulseSpec, SpinSpec, WingSpec, WobbleSpec,
};
