//! Animator registry.
//!
//! Holds every animator of the active scene and evaluates them against
//! the host clock once per frame. Evaluation order is registration order;
//! animators are independent, so the order has no observable effect.

use glam::Quat;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use slotmap::{SlotMap, new_key_type};

use crate::animation::kinematics;
use crate::animation::spec::{AnimatorSpec, FlickerSpec, OrbitSpec, PulseSpec, SpinSpec, WingSpec};
use crate::errors::{Result, WispError};
use crate::scene::{NodeHandle, Scene};

new_key_type! {
    /// Stable identifier for a registered animator.
    pub struct AnimatorId;
}

/// Runtime form of a spec. Identical to [`AnimatorSpec`] except that the
/// orbit variant carries its integrated angle.
#[derive(Debug, Clone)]
enum AnimatorKind {
    Orbit { spec: OrbitSpec, angle: f32 },
    Wing(WingSpec),
    Pulse(PulseSpec),
    Flicker(FlickerSpec),
    Spin(SpinSpec),
    Composite(Vec<AnimatorKind>),
}

impl AnimatorKind {
    fn from_spec(spec: AnimatorSpec) -> Self {
        match spec {
            AnimatorSpec::Orbit(orbit) => Self::Orbit {
                angle: orbit.initial_angle,
                spec: orbit,
            },
            AnimatorSpec::Wing(wing) => Self::Wing(wing),
            AnimatorSpec::Pulse(pulse) => Self::Pulse(pulse),
            AnimatorSpec::Flicker(flicker) => Self::Flicker(flicker),
            AnimatorSpec::Spin(spin) => Self::Spin(spin),
            AnimatorSpec::Composite(parts) => {
                Self::Composite(parts.into_iter().map(Self::from_spec).collect())
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Animator {
    target: NodeHandle,
    kind: AnimatorKind,
}

/// Ordered collection of animators for the active scene.
///
/// Owns the RNG that feeds flicker animators, seeded at construction so
/// test runs are reproducible.
pub struct AnimatorRegistry {
    animators: SlotMap<AnimatorId, Animator>,
    /// Registration order; evaluation follows it.
    order: Vec<AnimatorId>,
    /// Elapsed time seen by the previous tick, for deriving dt.
    last_time: Option<f32>,
    rng: StdRng,
}

impl AnimatorRegistry {
    const DEFAULT_SEED: u64 = 0x57A6_E11F;

    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            animators: SlotMap::with_key(),
            order: Vec::new(),
            last_time: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Registers an animator for `target`.
    ///
    /// The spec is validated here: malformed parameters and handles that
    /// do not belong to `scene` are rejected, which is what lets
    /// [`update`](Self::update) run without an error path.
    pub fn register(
        &mut self,
        scene: &Scene,
        target: NodeHandle,
        spec: AnimatorSpec,
    ) -> Result<AnimatorId> {
        spec.validate()?;
        Self::validate_targets(scene, target, &spec)?;

        let id = self.animators.insert(Animator {
            target,
            kind: AnimatorKind::from_spec(spec),
        });
        self.order.push(id);
        Ok(id)
    }

    fn validate_targets(scene: &Scene, target: NodeHandle, spec: &AnimatorSpec) -> Result<()> {
        if !scene.contains_node(target) {
            return Err(WispError::InvalidObject(
                "target handle does not belong to the active scene".into(),
            ));
        }

        match spec {
            AnimatorSpec::Wing(wing) => {
                if !scene.contains_node(wing.left_wing) || !scene.contains_node(wing.right_wing) {
                    return Err(WispError::InvalidObject(
                        "wing limb handle does not belong to the active scene".into(),
                    ));
                }
                Ok(())
            }
            AnimatorSpec::Pulse(_) | AnimatorSpec::Flicker(_) => {
                if scene.light_of(target).is_none() {
                    return Err(WispError::InvalidObject(
                        "intensity animator target carries no light".into(),
                    ));
                }
                Ok(())
            }
            AnimatorSpec::Composite(parts) => {
                for part in parts {
                    Self::validate_targets(scene, target, part)?;
                }
                Ok(())
            }
            AnimatorSpec::Orbit(_) | AnimatorSpec::Spin(_) => Ok(()),
        }
    }

    /// Unregisters one animator. Returns whether it existed.
    pub fn remove(&mut self, id: AnimatorId) -> bool {
        if self.animators.remove(id).is_some() {
            self.order.retain(|&other| other != id);
            true
        } else {
            false
        }
    }

    /// Discards every animator and the tick history. Called as part of the
    /// atomic scene teardown.
    pub fn clear(&mut self) {
        self.animators.clear();
        self.order.clear();
        self.last_time = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Evaluates every animator at elapsed time `t` (seconds, monotonic),
    /// writing poses and intensities into `scene` in place.
    ///
    /// Never fails: specs were validated at registration, and animators
    /// whose nodes have since been removed are skipped silently.
    pub fn update(&mut self, t: f32, scene: &mut Scene) {
        let dt = self.last_time.map_or(0.0, |last| (t - last).max(0.0));
        self.last_time = Some(t);

        for &id in &self.order {
            let Some(animator) = self.animators.get_mut(id) else {
                continue;
            };
            apply(&mut animator.kind, animator.target, t, dt, scene, &mut self.rng);
        }
    }
}

impl Default for AnimatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(
    kind: &mut AnimatorKind,
    target: NodeHandle,
    t: f32,
    dt: f32,
    scene: &mut Scene,
    rng: &mut StdRng,
) {
    match kind {
        AnimatorKind::Orbit { spec, angle } => {
            *angle += spec.angular_speed * dt;
            let (position, yaw) = kinematics::orbit_sample(spec, *angle, t);
            if let Some(node) = scene.get_node_mut(target) {
                node.transform.position = position;
                if spec.face_travel {
                    let pitch = kinematics::orbit_pitch(spec, t);
                    node.transform.set_rotation_euler(pitch, yaw, 0.0);
                }
            }
        }
        AnimatorKind::Wing(wing) => {
            let flap = kinematics::wing_flap(wing.wing_speed, wing.amplitude, wing.phase, t);
            if let Some(left) = scene.get_node_mut(wing.left_wing) {
                left.transform.rotation = Quat::from_rotation_z(flap);
            }
            if let Some(right) = scene.get_node_mut(wing.right_wing) {
                right.transform.rotation = Quat::from_rotation_z(-flap);
            }
        }
        AnimatorKind::Pulse(pulse) => {
            if let Some(light) = scene.light_of_mut(target) {
                light.intensity = kinematics::pulse_intensity(pulse, t);
            }
        }
        AnimatorKind::Flicker(flicker) => {
            if let Some(light) = scene.light_of_mut(target) {
                let brightness: f32 = rng.random();
                let dropout_roll: f32 = rng.random();
                light.intensity = if dropout_roll < flicker.dropout_chance {
                    flicker.dropout_intensity
                } else {
                    flicker.base + brightness * flicker.delta
                };
            }
        }
        AnimatorKind::Spin(spin) => {
            if let Some(node) = scene.get_node_mut(target) {
                node.transform
                    .set_rotation_euler(spin.rate.x * t, spin.rate.y * t, spin.rate.z * t);
            }
        }
        AnimatorKind::Composite(parts) => {
            for part in parts {
                apply(part, target, t, dt, scene, rng);
            }
        }
    }
}
