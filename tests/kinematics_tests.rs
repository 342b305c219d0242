//! Kinematics Tests
//!
//! Tests for:
//! - Orbit circle/ellipse invariants and facing direction
//! - Wing flap symmetry and phase behavior
//! - Pulse intensity bounds
//! - Bounce height rectification
//! - Determinism of the wobble variant

use std::f32::consts::{FRAC_PI_2, PI};

use wisp::animation::kinematics::{orbit_pitch, orbit_sample, pulse_intensity, wing_flap};
use wisp::{HeightMotion, OrbitSpec, PulseSpec, WobbleSpec};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Orbit: circle invariant
// ============================================================================

#[test]
fn orbit_stays_on_circle() {
    let spec = OrbitSpec {
        radius: 2.5,
        angular_speed: 1.3,
        base_height: 1.0,
        height_speed: 2.0,
        height_amplitude: 0.7,
        phase: 0.3,
        ..OrbitSpec::default()
    };

    for i in 0..=100 {
        let t = i as f32 * 0.1;
        let angle = spec.angular_speed * t;
        let (pos, _) = orbit_sample(&spec, angle, t);
        let planar = pos.x * pos.x + pos.z * pos.z;
        assert!(
            approx(planar, spec.radius * spec.radius),
            "t={t}: x^2+z^2={planar}, expected {}",
            spec.radius * spec.radius
        );
    }
}

#[test]
fn orbit_zero_radius_pins_to_axis() {
    let spec = OrbitSpec {
        radius: 0.0,
        base_height: 2.0,
        height_speed: 3.0,
        height_amplitude: 1.0,
        ..OrbitSpec::default()
    };

    for i in 0..=50 {
        let t = i as f32 * 0.2;
        let (pos, _) = orbit_sample(&spec, 1.7 * t, t);
        assert!(pos.x == 0.0 && pos.z == 0.0, "t={t}: drifted off axis");
    }
}

#[test]
fn orbit_height_follows_sine() {
    let spec = OrbitSpec {
        radius: 1.0,
        base_height: 3.0,
        height_speed: 2.0,
        height_amplitude: 0.5,
        phase: 1.0,
        ..OrbitSpec::default()
    };

    let t = 0.8;
    let (pos, _) = orbit_sample(&spec, 0.0, t);
    let expected = 3.0 + (t * 2.0 + 1.0).sin() * 0.5;
    assert!(approx(pos.y, expected), "y={}, expected {expected}", pos.y);
}

#[test]
fn orbit_faces_direction_of_travel() {
    let spec = OrbitSpec {
        radius: 4.0,
        face_travel: true,
        ..OrbitSpec::default()
    };

    let angle = 1.2;
    let (_, yaw) = orbit_sample(&spec, angle, 0.0);
    assert!(approx(yaw, angle + FRAC_PI_2), "yaw={yaw}");
}

// ============================================================================
// Orbit: wobble (erratic) variant
// ============================================================================

#[test]
fn wobble_orbit_stays_on_swaying_ellipse() {
    let wobble = WobbleSpec {
        angle_speed: 3.0,
        angle_amount: 0.5,
        radius_sway: 1.0,
        pitch_speed: 2.0,
        pitch_amount: 0.2,
    };
    let spec = OrbitSpec {
        radius: 5.0,
        angular_speed: 0.8,
        phase: 2.0,
        wobble: Some(wobble),
        ..OrbitSpec::default()
    };

    for i in 0..=100 {
        let t = i as f32 * 0.13;
        let angle = spec.angular_speed * t;
        let (pos, _) = orbit_sample(&spec, angle, t);

        // Instantaneous per-axis radii from the same formulas.
        let rx = spec.radius + (t + spec.phase).sin() * wobble.radius_sway;
        let rz = spec.radius + (t + spec.phase).cos() * wobble.radius_sway;
        let normalized = (pos.x / rx).powi(2) + (pos.z / rz).powi(2);
        assert!(
            approx(normalized, 1.0),
            "t={t}: normalized ellipse equation = {normalized}"
        );
    }
}

#[test]
fn wobble_is_deterministic() {
    let spec = OrbitSpec {
        radius: 5.0,
        angular_speed: 0.8,
        phase: 1.5,
        wobble: Some(WobbleSpec::default()),
        ..OrbitSpec::default()
    };

    let (a_pos, a_yaw) = orbit_sample(&spec, 2.0, 3.7);
    let (b_pos, b_yaw) = orbit_sample(&spec, 2.0, 3.7);
    assert_eq!(a_pos, b_pos);
    assert_eq!(a_yaw, b_yaw);
}

#[test]
fn pitch_sway_zero_without_wobble() {
    let spec = OrbitSpec {
        radius: 3.0,
        ..OrbitSpec::default()
    };
    assert_eq!(orbit_pitch(&spec, 12.3), 0.0);
}

// ============================================================================
// Wing flap
// ============================================================================

#[test]
fn wing_flap_peaks_at_quarter_period() {
    // wing_speed 8, phase 0, t = pi/16: sin(pi/2) = 1, so flap = amplitude.
    let amplitude = 0.4;
    let flap = wing_flap(8.0, amplitude, 0.0, PI / 16.0);
    assert!(approx(flap, amplitude), "flap={flap}");
}

#[test]
fn wing_flap_bounded_by_amplitude() {
    for i in 0..=100 {
        let t = i as f32 * 0.07;
        let flap = wing_flap(6.5, 0.6, 1.2, t);
        assert!(flap.abs() <= 0.6 + EPSILON, "t={t}: |flap| exceeded amplitude");
    }
}

#[test]
fn wing_flap_phase_desynchronizes() {
    let t = 0.4;
    let a = wing_flap(8.0, 0.4, 0.0, t);
    let b = wing_flap(8.0, 0.4, 1.0, t);
    assert!((a - b).abs() > EPSILON, "identical flap despite phase offset");
}

// ============================================================================
// Pulse intensity
// ============================================================================

#[test]
fn pulse_is_bounded() {
    let spec = PulseSpec::new(1.2, 0.4, 1.5);
    for i in 0..=1000 {
        let t = i as f32 * 0.03;
        let intensity = pulse_intensity(&spec, t);
        assert!(
            (0.8 - EPSILON..=1.6 + EPSILON).contains(&intensity),
            "t={t}: intensity {intensity} out of [base-delta, base+delta]"
        );
    }
}

#[test]
fn pulse_phase_shifts_wave() {
    // A phase of pi/2 turns sine into cosine.
    let sine = PulseSpec::new(1.0, 0.5, 2.0);
    let cosine = PulseSpec {
        phase: FRAC_PI_2,
        ..sine
    };
    let t: f32 = 0.9;
    let expected = 1.0 + (t * 2.0).cos() * 0.5;
    assert!(approx(pulse_intensity(&cosine, t), expected));
    assert!(approx(pulse_intensity(&sine, 0.0), 1.0));
}

// ============================================================================
// Bounce height motion
// ============================================================================

#[test]
fn bounce_never_dips_below_base() {
    let spec = OrbitSpec {
        radius: 6.0,
        base_height: 0.5,
        height_speed: 2.0,
        height_amplitude: 0.5,
        height_motion: HeightMotion::Bounce,
        ..OrbitSpec::default()
    };

    for i in 0..=500 {
        let t = i as f32 * 0.05;
        let (pos, _) = orbit_sample(&spec, 0.6 * t, t);
        assert!(
            pos.y >= spec.base_height - EPSILON,
            "t={t}: bounced below base ({})",
            pos.y
        );
    }
}
