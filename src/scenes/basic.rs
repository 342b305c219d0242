//! Basic lighting demo.
//!
//! One of every light type around a sphere/cube/torus trio. The three
//! shapes tumble slowly and the point light circles them at waist height.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::animation::{AnimatorSpec, OrbitSpec, SpinSpec};
use crate::errors::Result;
use crate::scene::Light;
use crate::scenes::{SceneContext, rgb};

pub fn build(ctx: &mut SceneContext<'_>) -> Result<()> {
    ctx.scene.environment.background = rgb(0x0f0f1e);
    ctx.scene.environment.set_ambient(Vec3::ONE, 0.3);

    // Lights
    let directional = ctx
        .scene
        .add_light("Directional", Light::new_directional(rgb(0x00fffc), 0.5));
    if let Some(node) = ctx.scene.get_node_mut(directional) {
        node.transform.position = Vec3::new(3.0, 3.0, 2.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    ctx.scene.add_light(
        "Hemisphere",
        Light::new_hemisphere(rgb(0xff0000), rgb(0x0000ff), 0.3),
    );

    let point = ctx
        .scene
        .add_light("Point", Light::new_point(rgb(0xff9000), 1.0, 10.0));

    let rect_area = ctx.scene.add_light(
        "Rect area",
        Light::new_rect_area(rgb(0x4e00ff), 3.0, 2.0, 2.0),
    );
    if let Some(node) = ctx.scene.get_node_mut(rect_area) {
        node.transform.position = Vec3::new(-3.0, 1.0, 0.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    let spot = ctx.scene.add_light(
        "Spot",
        Light::new_spot(rgb(0x78ff00), 1.0, 10.0, 0.0, std::f32::consts::PI * 0.15),
    );
    if let Some(node) = ctx.scene.get_node_mut(spot) {
        node.transform.position = Vec3::new(0.0, 3.0, 0.0);
    }

    // Objects
    let sphere = ctx
        .scene
        .build_node("Sphere")
        .with_position(-2.0, 0.0, 0.0)
        .build();
    let cube = ctx.scene.build_node("Cube").build();
    let torus = ctx
        .scene
        .build_node("Torus")
        .with_position(2.0, 0.0, 0.0)
        .build();
    ctx.scene
        .build_node("Floor")
        .with_position(0.0, -0.65, 0.0)
        .with_rotation_euler(-FRAC_PI_2, 0.0, 0.0)
        .build();

    // The trio tumbles in lockstep.
    let tumble = SpinSpec {
        rate: Vec3::new(0.3, 0.2, 0.0),
    };
    ctx.register(sphere, AnimatorSpec::Spin(tumble))?;
    ctx.register(cube, AnimatorSpec::Spin(tumble))?;
    ctx.register(torus, AnimatorSpec::Spin(tumble))?;

    // The point light circles the shapes.
    ctx.register(
        point,
        AnimatorSpec::Orbit(OrbitSpec {
            radius: 3.0,
            angular_speed: 1.0,
            base_height: 1.0,
            ..OrbitSpec::default()
        }),
    )?;

    ctx.scene.add_camera(Vec3::new(4.0, 3.0, 6.0));

    Ok(())
}
