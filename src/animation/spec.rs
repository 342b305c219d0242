//! Animator descriptors.
//!
//! An [`AnimatorSpec`] is a plain-data record describing one behavior.
//! Specs are validated once at registration; the per-tick evaluator can
//! then run without an error path. Keeping descriptors separate from
//! runtime state (the orbit angle) makes them cheap to construct in scene
//! definitions and easy to test in isolation.

use glam::Vec3;

use crate::errors::{Result, WispError};
use crate::scene::NodeHandle;

/// Vertical motion shape for orbiting objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightMotion {
    /// Smooth sine wave around the base height.
    #[default]
    Wave,
    /// Rectified sine: never dips below the base height.
    Bounce,
}

/// Secondary wobble layered onto an orbit to break up its regularity.
///
/// A sum of two periodic signals: the result looks erratic but is fully
/// deterministic for a given phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WobbleSpec {
    /// Frequency of the angular wobble.
    pub angle_speed: f32,
    /// Amplitude of the angular wobble (radians).
    pub angle_amount: f32,
    /// Amplitude of the radius sway.
    pub radius_sway: f32,
    /// Frequency of the pitch sway.
    pub pitch_speed: f32,
    /// Amplitude of the pitch sway (radians).
    pub pitch_amount: f32,
}

impl Default for WobbleSpec {
    fn default() -> Self {
        Self {
            angle_speed: 3.0,
            angle_amount: 0.5,
            radius_sway: 1.0,
            pitch_speed: 2.0,
            pitch_amount: 0.2,
        }
    }
}

/// Circular orbit around the world Y axis with sinusoidal height.
///
/// The angle integrates `angular_speed` over time; everything else is a
/// pure function of elapsed time. With `radius` 0 the object stays pinned
/// to the axis and only the height term moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    pub radius: f32,
    /// Radians per second. Negative reverses the direction of travel.
    pub angular_speed: f32,
    pub base_height: f32,
    /// Frequency of the height oscillation.
    pub height_speed: f32,
    pub height_amplitude: f32,
    /// Per-object phase offset, assigned once at spawn to desynchronize
    /// otherwise-identical objects (typically the spawn-batch index).
    pub phase: f32,
    /// Orbit angle at spawn.
    pub initial_angle: f32,
    pub height_motion: HeightMotion,
    /// Yaw the object into its direction of travel.
    pub face_travel: bool,
    pub wobble: Option<WobbleSpec>,
}

impl Default for OrbitSpec {
    fn default() -> Self {
        Self {
            radius: 0.0,
            angular_speed: 0.0,
            base_height: 0.0,
            height_speed: 0.0,
            height_amplitude: 0.0,
            phase: 0.0,
            initial_angle: 0.0,
            height_motion: HeightMotion::Wave,
            face_travel: false,
            wobble: None,
        }
    }
}

/// Symmetric wing flapping on a pair of limb nodes.
///
/// The left limb rotates by `+flap` about Z, the right by `-flap`; the
/// creature body node is the registration target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingSpec {
    pub wing_speed: f32,
    /// Peak deflection (radians).
    pub amplitude: f32,
    pub phase: f32,
    pub left_wing: NodeHandle,
    pub right_wing: NodeHandle,
}

/// Deterministic intensity wave, bounded to `[base - delta, base + delta]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSpec {
    pub base: f32,
    pub delta: f32,
    pub freq: f32,
    pub phase: f32,
}

impl PulseSpec {
    #[must_use]
    pub fn new(base: f32, delta: f32, freq: f32) -> Self {
        Self {
            base,
            delta,
            freq,
            phase: 0.0,
        }
    }
}

/// Memory-less random intensity with occasional dropouts.
///
/// Each tick draws fresh randomness: `base + U(0,1) * delta`, with a
/// `dropout_chance` probability of forcing `dropout_intensity` instead to
/// simulate a failing light. Never smoothed against the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickerSpec {
    pub base: f32,
    pub delta: f32,
    pub dropout_chance: f32,
    pub dropout_intensity: f32,
}

impl FlickerSpec {
    /// Fraction of ticks forced to the dropout intensity.
    pub const DEFAULT_DROPOUT_CHANCE: f32 = 0.05;
    /// Near-dark intensity used for dropout ticks.
    pub const DEFAULT_DROPOUT_INTENSITY: f32 = 0.1;

    #[must_use]
    pub fn new(base: f32, delta: f32) -> Self {
        Self {
            base,
            delta,
            dropout_chance: Self::DEFAULT_DROPOUT_CHANCE,
            dropout_intensity: Self::DEFAULT_DROPOUT_INTENSITY,
        }
    }
}

/// Constant-rate rotation about the object's Euler axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSpec {
    /// Radians per second around X/Y/Z.
    pub rate: Vec3,
}

/// A behavior descriptor bound to one scene node at registration.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorSpec {
    Orbit(OrbitSpec),
    Wing(WingSpec),
    Pulse(PulseSpec),
    Flicker(FlickerSpec),
    Spin(SpinSpec),
    /// Several behaviors on the same target, evaluated in order.
    Composite(Vec<AnimatorSpec>),
}

fn ensure_finite(value: f32, what: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WispError::MalformedSpec(format!("{what} must be finite")))
    }
}

impl AnimatorSpec {
    /// Validates every numeric parameter. Called at registration so that
    /// per-tick evaluation never has to fail.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Orbit(orbit) => {
                ensure_finite(orbit.radius, "orbit radius")?;
                ensure_finite(orbit.angular_speed, "orbit angular_speed")?;
                ensure_finite(orbit.base_height, "orbit base_height")?;
                ensure_finite(orbit.height_speed, "orbit height_speed")?;
                ensure_finite(orbit.height_amplitude, "orbit height_amplitude")?;
                ensure_finite(orbit.phase, "orbit phase")?;
                ensure_finite(orbit.initial_angle, "orbit initial_angle")?;
                if orbit.radius < 0.0 {
                    return Err(WispError::MalformedSpec(
                        "orbit radius must not be negative".into(),
                    ));
                }
                if let Some(wobble) = &orbit.wobble {
                    ensure_finite(wobble.angle_speed, "wobble angle_speed")?;
                    ensure_finite(wobble.angle_amount, "wobble angle_amount")?;
                    ensure_finite(wobble.radius_sway, "wobble radius_sway")?;
                    ensure_finite(wobble.pitch_speed, "wobble pitch_speed")?;
                    ensure_finite(wobble.pitch_amount, "wobble pitch_amount")?;
                }
                Ok(())
            }
            Self::Wing(wing) => {
                ensure_finite(wing.wing_speed, "wing_speed")?;
                ensure_finite(wing.amplitude, "wing amplitude")?;
                ensure_finite(wing.phase, "wing phase")?;
                Ok(())
            }
            Self::Pulse(pulse) => {
                ensure_finite(pulse.base, "pulse base")?;
                ensure_finite(pulse.delta, "pulse delta")?;
                ensure_finite(pulse.freq, "pulse freq")?;
                ensure_finite(pulse.phase, "pulse phase")?;
                Ok(())
            }
            Self::Flicker(flicker) => {
                ensure_finite(flicker.base, "flicker base")?;
                ensure_finite(flicker.delta, "flicker delta")?;
                ensure_finite(flicker.dropout_chance, "flicker dropout_chance")?;
                ensure_finite(flicker.dropout_intensity, "flicker dropout_intensity")?;
                if !(0.0..=1.0).contains(&flicker.dropout_chance) {
                    return Err(WispError::MalformedSpec(
                        "flicker dropout_chance must be within [0, 1]".into(),
                    ));
                }
                Ok(())
            }
            Self::Spin(spin) => {
                ensure_finite(spin.rate.x, "spin rate.x")?;
                ensure_finite(spin.rate.y, "spin rate.y")?;
                ensure_finite(spin.rate.z, "spin rate.z")?;
                Ok(())
            }
            Self::Composite(parts) => {
                if parts.is_empty() {
                    return Err(WispError::MalformedSpec(
                        "composite animator has no parts".into(),
                    ));
                }
                for part in parts {
                    part.validate()?;
                }
                Ok(())
            }
        }
    }
}
