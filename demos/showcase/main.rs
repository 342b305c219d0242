//! Showcase runner.
//!
//! Drives the haunted-house vignette headlessly for a few seconds: loads
//! the scene, ticks the engine at display cadence from a wall-clock
//! timer, and prints a couple of animated poses each second so the motion
//! is visible without a renderer attached. Finishes by switching scenes
//! through the settings import path and exporting the result.
//!
//! Run with: `RUST_LOG=info cargo run --example showcase`

use std::thread;
use std::time::Duration;

use wisp::{Engine, Timer};

const FRAME_BUDGET: Duration = Duration::from_millis(16);
const RUN_FRAMES: u64 = 180;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut engine = Engine::with_seed(7);
    engine.load_scene("haunted")?;

    println!(
        "Scene {:?}: {} animators registered",
        engine.current_scene_name().unwrap_or("?"),
        engine.animator_count()
    );

    let mut timer = Timer::new();
    for frame in 0..RUN_FRAMES {
        timer.tick();
        engine.tick(timer.elapsed_seconds());

        if frame % 60 == 0 {
            report(&engine);
        }

        thread::sleep(FRAME_BUDGET);
    }

    // Scene switches arrive as settings JSON in the desktop shell.
    engine.import_settings(r#"{ "scene": "shadows" }"#)?;
    println!(
        "Switched to {:?}: {} animators registered",
        engine.current_scene_name().unwrap_or("?"),
        engine.animator_count()
    );

    let json = engine.export_settings_json()?;
    println!("Exported settings:\n{json}");

    Ok(())
}

fn report(engine: &Engine) {
    let Some(scene) = engine.scene() else {
        return;
    };

    if let Some(handle) = scene.find_node("Crow 0")
        && let Some(node) = scene.get_node(handle)
    {
        let p = node.transform.position;
        println!(
            "t={:6.2}s  Crow 0 at ({:6.2}, {:5.2}, {:6.2})",
            engine.time(),
            p.x,
            p.y,
            p.z
        );
    }

    if let Some(handle) = scene.find_node("Porch light")
        && let Some(light) = scene.light_of(handle)
    {
        println!("          Porch light intensity {:.2}", light.intensity);
    }
}
