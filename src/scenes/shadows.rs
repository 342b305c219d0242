//! Shadows showcase.
//!
//! Three shadow-casting lights over a bouncing sphere and two spinning
//! shapes. The sphere bobs off-axis: its column offset lives on a rig
//! node so the bounce itself is a plain zero-radius orbit.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::animation::{AnimatorSpec, HeightMotion, OrbitSpec, SpinSpec};
use crate::errors::Result;
use crate::scene::Light;
use crate::scenes::{SceneContext, rgb};

pub fn build(ctx: &mut SceneContext<'_>) -> Result<()> {
    ctx.scene.environment.background = rgb(0x0f0f1e);
    ctx.scene.environment.set_ambient(Vec3::ONE, 0.3);

    // Lights
    let directional = ctx.scene.add_light(
        "Directional",
        Light::new_directional(Vec3::ONE, 0.8).with_shadow(2048, 20.0),
    );
    if let Some(node) = ctx.scene.get_node_mut(directional) {
        node.transform.position = Vec3::new(3.0, 4.0, 2.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    let point = ctx.scene.add_light(
        "Point",
        Light::new_point(rgb(0xff6600), 2.0, 10.0).with_shadow(1024, 10.0),
    );

    let spot = ctx.scene.add_light(
        "Spot",
        Light::new_spot(rgb(0x00ff88), 2.0, 15.0, 0.0, PI * 0.2).with_shadow(1024, 15.0),
    );
    if let Some(node) = ctx.scene.get_node_mut(spot) {
        node.transform.position = Vec3::new(-2.0, 4.0, -2.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    // Objects
    let sphere_rig = ctx
        .scene
        .build_node("Sphere rig")
        .with_position(-1.5, 0.0, 0.0)
        .build();
    let sphere = ctx
        .scene
        .build_node("Sphere")
        .with_parent(sphere_rig)
        .build();
    let cube = ctx
        .scene
        .build_node("Cube")
        .with_position(0.0, 0.5, 0.0)
        .build();
    let torus = ctx
        .scene
        .build_node("Torus")
        .with_position(1.5, 0.8, 0.0)
        .build();
    ctx.scene
        .build_node("Floor")
        .with_rotation_euler(-FRAC_PI_2, 0.0, 0.0)
        .build();

    // Bouncing sphere: zero radius pins it to the rig's axis.
    ctx.register(
        sphere,
        AnimatorSpec::Orbit(OrbitSpec {
            radius: 0.0,
            base_height: 1.0,
            height_speed: 2.0,
            height_amplitude: 1.5,
            height_motion: HeightMotion::Bounce,
            ..OrbitSpec::default()
        }),
    )?;

    ctx.register(
        cube,
        AnimatorSpec::Spin(SpinSpec {
            rate: Vec3::new(0.0, 0.5, 0.0),
        }),
    )?;
    ctx.register(
        torus,
        AnimatorSpec::Spin(SpinSpec {
            rate: Vec3::new(0.6, 0.0, 0.0),
        }),
    )?;

    // Slow circle for the point light.
    ctx.register(
        point,
        AnimatorSpec::Orbit(OrbitSpec {
            radius: 3.0,
            angular_speed: 0.5,
            base_height: 2.0,
            ..OrbitSpec::default()
        }),
    )?;

    ctx.scene.add_camera(Vec3::new(4.0, 3.0, 6.0));

    Ok(())
}
