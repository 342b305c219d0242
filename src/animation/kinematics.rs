//! Closed-form kinematics.
//!
//! Pure functions shared by the registry and the tests. Every function is
//! a stateless mapping from (spec, time) to a pose sample; the only piece
//! of integrated state in the whole system, the orbit angle, is passed in
//! by the caller.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::animation::spec::{HeightMotion, OrbitSpec, PulseSpec};

/// Samples the height waveform at phase-adjusted input `x`.
#[inline]
#[must_use]
pub fn height_wave(motion: HeightMotion, x: f32) -> f32 {
    match motion {
        HeightMotion::Wave => x.sin(),
        HeightMotion::Bounce => x.sin().abs(),
    }
}

/// Samples an orbit at one instant.
///
/// Returns the position and the yaw facing the direction of travel.
/// `angle` is the integrated orbit angle owned by the caller; `t` is the
/// global elapsed time in seconds.
///
/// Without wobble the path is the circle
/// `x = cos(angle) * r`, `z = sin(angle) * r`. The wobble variant adds a
/// sinusoidal angle offset and sways the radius independently per axis,
/// tracing a breathing ellipse that reads as erratic flight while staying
/// fully deterministic.
#[must_use]
pub fn orbit_sample(spec: &OrbitSpec, angle: f32, t: f32) -> (Vec3, f32) {
    let (eff_angle, radius_x, radius_z) = match &spec.wobble {
        None => (angle, spec.radius, spec.radius),
        Some(wobble) => {
            let offset = (t * wobble.angle_speed + spec.phase * 0.5).sin() * wobble.angle_amount;
            (
                angle + offset,
                spec.radius + (t + spec.phase).sin() * wobble.radius_sway,
                spec.radius + (t + spec.phase).cos() * wobble.radius_sway,
            )
        }
    };

    let x = eff_angle.cos() * radius_x;
    let z = eff_angle.sin() * radius_z;
    let y = spec.base_height
        + height_wave(spec.height_motion, t * spec.height_speed + spec.phase)
            * spec.height_amplitude;

    (Vec3::new(x, y, z), eff_angle + FRAC_PI_2)
}

/// Pitch sway for wobbling orbits; zero without wobble.
#[inline]
#[must_use]
pub fn orbit_pitch(spec: &OrbitSpec, t: f32) -> f32 {
    spec.wobble
        .map_or(0.0, |w| (t * w.pitch_speed + spec.phase).sin() * w.pitch_amount)
}

/// Wing deflection at time `t`. The left limb applies `+flap`, the right
/// `-flap`, which is what keeps the stroke bilaterally symmetric.
#[inline]
#[must_use]
pub fn wing_flap(wing_speed: f32, amplitude: f32, phase: f32, t: f32) -> f32 {
    (t * wing_speed + phase).sin() * amplitude
}

/// Pulsing light intensity, bounded to `[base - delta, base + delta]`.
#[inline]
#[must_use]
pub fn pulse_intensity(spec: &PulseSpec, t: f32) -> f32 {
    spec.base + (t * spec.freq + spec.phase).sin() * spec.delta
}
