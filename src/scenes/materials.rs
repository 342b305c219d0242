//! Material explorer.
//!
//! Three spheres under plain lighting. A populated scene with no
//! animators at all: the update loop has nothing to do here, which is a
//! state the engine explicitly supports.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::errors::Result;
use crate::scene::Light;
use crate::scenes::{SceneContext, rgb};

pub fn build(ctx: &mut SceneContext<'_>) -> Result<()> {
    ctx.scene.environment.background = rgb(0x0f0f1e);
    ctx.scene.environment.set_ambient(Vec3::ONE, 0.5);

    let directional = ctx.scene.add_light(
        "Directional",
        Light::new_directional(Vec3::ONE, 0.8).with_shadow(1024, 20.0),
    );
    if let Some(node) = ctx.scene.get_node_mut(directional) {
        node.transform.position = Vec3::new(5.0, 5.0, 5.0);
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    for i in 0..3 {
        ctx.scene
            .build_node(&format!("Sphere {}", i + 1))
            .with_position((i as f32 - 1.0) * 2.5, 0.7, 0.0)
            .build();
    }

    ctx.scene
        .build_node("Floor")
        .with_rotation_euler(-FRAC_PI_2, 0.0, 0.0)
        .build();

    ctx.scene.add_camera(Vec3::new(4.0, 3.0, 6.0));

    Ok(())
}
