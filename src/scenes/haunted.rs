//! Haunted house vignette.
//!
//! A Victorian house at the origin, window and tower lights breathing, a
//! failing porch lantern, four ghost lights roaming the graveyard and two
//! flocks of flying creatures. All spawn-time jitter comes from the
//! injected RNG so a seeded engine replays the same vignette.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::animation::{
    AnimatorSpec, FlickerSpec, HeightMotion, OrbitSpec, PulseSpec, WingSpec, WobbleSpec,
};
use crate::errors::Result;
use crate::scene::{Light, NodeHandle};
use crate::scenes::{SceneContext, rgb};

const CROW_COUNT: usize = 5;
const BAT_COUNT: usize = 8;

pub fn build(ctx: &mut SceneContext<'_>) -> Result<()> {
    ctx.scene.environment.background = rgb(0x1a0f2e);
    ctx.scene.environment.set_fog(rgb(0x1a0f2e), 1.0, 15.0);
    ctx.scene.environment.set_ambient(rgb(0x4a0e4e), 0.12);

    let moon = ctx.scene.add_light(
        "Moon",
        Light::new_directional(rgb(0x9fdfbf), 0.2).with_shadow(512, 20.0),
    );
    if let Some(node) = ctx.scene.get_node_mut(moon) {
        node.transform.position = Vec3::new(4.0, 8.0, -3.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    build_house(ctx)?;
    build_ghosts(ctx)?;
    build_flocks(ctx)?;

    ctx.scene.add_camera(Vec3::new(6.0, 3.0, 8.0));

    Ok(())
}

/// House anchor with its attached lights: two glowing windows, the tower
/// lantern, the door lamp and the flickering porch light.
fn build_house(ctx: &mut SceneContext<'_>) -> Result<()> {
    let house = ctx.scene.build_node("House").build();

    let window_positions = [Vec3::new(-1.5, 2.0, 2.5), Vec3::new(1.5, 2.0, 2.5)];
    for (i, position) in window_positions.into_iter().enumerate() {
        let name = if i == 0 { "Window light L" } else { "Window light R" };
        let window = ctx.scene.add_light_to_parent(
            name,
            Light::new_point(rgb(0xff4400), 0.8, 5.0).with_shadow(256, 6.0),
            house,
        );
        if let Some(node) = ctx.scene.get_node_mut(window) {
            node.transform.position = position;
        }
        // Offset the second window by a quarter turn so the pair breathes
        // out of step.
        ctx.register(
            window,
            AnimatorSpec::Pulse(PulseSpec {
                base: 0.8,
                delta: 0.2,
                freq: if i == 0 { 3.0 } else { 2.5 },
                phase: i as f32 * std::f32::consts::FRAC_PI_2,
            }),
        )?;
    }

    let tower = ctx.scene.add_light_to_parent(
        "Tower light",
        Light::new_point(rgb(0x8800ff), 1.2, 6.0).with_shadow(256, 7.0),
        house,
    );
    if let Some(node) = ctx.scene.get_node_mut(tower) {
        node.transform.position = Vec3::new(3.0, 3.0, 0.0);
    }
    ctx.register(tower, AnimatorSpec::Pulse(PulseSpec::new(1.2, 0.4, 1.5)))?;

    let door = ctx.scene.add_light_to_parent(
        "Door light",
        Light::new_point(rgb(0xff7d46), 1.5, 7.0).with_shadow(256, 5.0),
        house,
    );
    if let Some(node) = ctx.scene.get_node_mut(door) {
        node.transform.position = Vec3::new(0.0, 2.2, 2.7);
    }

    let porch = ctx.scene.add_light_to_parent(
        "Porch light",
        Light::new_point(rgb(0xffaa00), 0.6, 4.0).with_shadow(256, 5.0),
        house,
    );
    if let Some(node) = ctx.scene.get_node_mut(porch) {
        node.transform.position = Vec3::new(0.0, 2.5, 3.2);
    }
    ctx.register(porch, AnimatorSpec::Flicker(FlickerSpec::new(0.6, 0.3)))?;

    Ok(())
}

/// Four spectral point lights, each a composite of an orbit and an
/// intensity pulse.
fn build_ghosts(ctx: &mut SceneContext<'_>) -> Result<()> {
    // Ground-level green ghost, hopping.
    let ghost1 = ctx
        .scene
        .add_light("Ghost green", Light::new_point(rgb(0x00ff88), 3.0, 4.0));
    ctx.register(
        ghost1,
        AnimatorSpec::Composite(vec![
            AnimatorSpec::Orbit(OrbitSpec {
                radius: 6.0,
                angular_speed: 0.6,
                base_height: 0.5,
                height_speed: 2.0,
                height_amplitude: 0.5,
                height_motion: HeightMotion::Bounce,
                ..OrbitSpec::default()
            }),
            AnimatorSpec::Pulse(PulseSpec::new(3.0, 0.5, 4.0)),
        ]),
    )?;

    // High floating purple ghost, orbiting the other way.
    let ghost2 = ctx
        .scene
        .add_light("Ghost purple", Light::new_point(rgb(0xaa00ff), 2.5, 3.5));
    ctx.register(
        ghost2,
        AnimatorSpec::Composite(vec![
            AnimatorSpec::Orbit(OrbitSpec {
                radius: 7.0,
                angular_speed: -0.32,
                base_height: 3.0,
                height_speed: 1.5,
                height_amplitude: 1.5,
                ..OrbitSpec::default()
            }),
            AnimatorSpec::Pulse(PulseSpec::new(2.5, 0.8, 3.0)),
        ]),
    )?;

    // Red ghost: erratic darting via the wobble variant.
    let ghost3 = ctx
        .scene
        .add_light("Ghost red", Light::new_point(rgb(0xff0044), 2.0, 3.0));
    ctx.register(
        ghost3,
        AnimatorSpec::Composite(vec![
            AnimatorSpec::Orbit(OrbitSpec {
                radius: 5.0,
                angular_speed: 1.2,
                base_height: 1.0,
                height_speed: 5.0,
                height_amplitude: 1.5,
                height_motion: HeightMotion::Bounce,
                wobble: Some(WobbleSpec {
                    angle_speed: 3.0,
                    angle_amount: 0.5,
                    radius_sway: 2.0,
                    pitch_speed: 0.0,
                    pitch_amount: 0.0,
                }),
                ..OrbitSpec::default()
            }),
            AnimatorSpec::Pulse(PulseSpec::new(2.0, 1.0, 8.0)),
        ]),
    )?;

    // Slow, ominous blue ghost circling the whole property.
    let ghost4 = ctx
        .scene
        .add_light("Ghost blue", Light::new_point(rgb(0x0088ff), 2.2, 3.2));
    ctx.register(
        ghost4,
        AnimatorSpec::Composite(vec![
            AnimatorSpec::Orbit(OrbitSpec {
                radius: 10.0,
                angular_speed: 0.25,
                base_height: 2.0,
                height_speed: 0.8,
                height_amplitude: 0.8,
                ..OrbitSpec::default()
            }),
            AnimatorSpec::Pulse(PulseSpec::new(2.2, 0.5, 2.0)),
        ]),
    )?;

    Ok(())
}

/// A crow or bat body with two wing limbs.
fn spawn_creature(ctx: &mut SceneContext<'_>, name: &str, wing_offset: f32) -> CreatureNodes {
    let body = ctx.scene.build_node(name).build();
    let left_wing = ctx
        .scene
        .build_node(&format!("{name} left wing"))
        .with_position(-wing_offset, 0.0, 0.0)
        .with_parent(body)
        .build();
    let right_wing = ctx
        .scene
        .build_node(&format!("{name} right wing"))
        .with_position(wing_offset, 0.0, 0.0)
        .with_parent(body)
        .build();
    CreatureNodes {
        body,
        left_wing,
        right_wing,
    }
}

struct CreatureNodes {
    body: NodeHandle,
    left_wing: NodeHandle,
    right_wing: NodeHandle,
}

fn build_flocks(ctx: &mut SceneContext<'_>) -> Result<()> {
    use rand::RngExt;

    // Crows: wide lazy circles, slow deep wingbeats.
    for i in 0..CROW_COUNT {
        let angle = ctx.rng().random_range(0.0..TAU);
        let radius = 6.0 + ctx.rng().random_range(0.0..4.0);
        let height = 3.0 + ctx.rng().random_range(0.0..3.0);
        let angular_speed = ctx.rng().random_range(0.3..0.7);
        let height_speed = ctx.rng().random_range(0.5..1.0);
        let wing_speed = ctx.rng().random_range(7.5..8.5);
        let wing_amplitude = ctx.rng().random_range(0.35..0.45);

        let crow = spawn_creature(ctx, &format!("Crow {i}"), 0.2);
        ctx.register(
            crow.body,
            AnimatorSpec::Composite(vec![
                AnimatorSpec::Orbit(OrbitSpec {
                    radius,
                    angular_speed,
                    base_height: height,
                    height_speed,
                    height_amplitude: 0.5,
                    phase: i as f32,
                    initial_angle: angle,
                    face_travel: true,
                    ..OrbitSpec::default()
                }),
                AnimatorSpec::Wing(WingSpec {
                    wing_speed,
                    amplitude: wing_amplitude,
                    phase: i as f32,
                    left_wing: crow.left_wing,
                    right_wing: crow.right_wing,
                }),
            ]),
        )?;
    }

    // Bats: tighter, faster, wobbling flight and a quicker stroke.
    for i in 0..BAT_COUNT {
        let angle = ctx.rng().random_range(0.0..TAU);
        let radius = 5.0 + ctx.rng().random_range(0.0..5.0);
        let height = 2.0 + ctx.rng().random_range(0.0..4.0);
        let angular_speed = ctx.rng().random_range(0.5..1.1);
        let height_speed = ctx.rng().random_range(0.8..1.5);
        let wing_speed = 5.0 + ctx.rng().random_range(0.0..3.0);
        let wing_amplitude = ctx.rng().random_range(0.55..0.65);

        let bat = spawn_creature(ctx, &format!("Bat {i}"), 0.3);
        ctx.register(
            bat.body,
            AnimatorSpec::Composite(vec![
                AnimatorSpec::Orbit(OrbitSpec {
                    radius,
                    angular_speed,
                    base_height: height,
                    height_speed,
                    height_amplitude: 1.0,
                    phase: i as f32,
                    initial_angle: angle,
                    face_travel: true,
                    wobble: Some(WobbleSpec::default()),
                    ..OrbitSpec::default()
                }),
                AnimatorSpec::Wing(WingSpec {
                    wing_speed,
                    amplitude: wing_amplitude,
                    phase: i as f32,
                    left_wing: bat.left_wing,
                    right_wing: bat.right_wing,
                }),
            ]),
        )?;
    }

    Ok(())
}
