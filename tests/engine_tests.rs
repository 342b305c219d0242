//! Engine and Scene Lifecycle Tests
//!
//! Tests for:
//! - Scene slot state machine (Empty -> Populated -> Empty)
//! - Atomic handoff on load: no animators survive a scene switch
//! - Demo scene builder registration counts
//! - Unknown scene fallback
//! - Settings export/import round trip
//! - Deterministic spawns under a fixed seed

use wisp::scenes::SceneContext;
use wisp::{
    AnimatorSpec, DEFAULT_SCENE, Engine, NodeHandle, OrbitSpec, Result, Settings, WispError,
};

const EPSILON: f32 = 1e-4;

/// Minimal builder for lifecycle tests: a camera and one still node.
fn empty_scene(ctx: &mut SceneContext<'_>) -> Result<()> {
    ctx.scene.add_camera(glam::Vec3::new(0.0, 0.0, 5.0));
    ctx.scene.build_node("probe").build();
    Ok(())
}

/// Builder that checks the registry was emptied before construction ran.
fn assert_clean_slate(ctx: &mut SceneContext<'_>) -> Result<()> {
    if ctx.animator_count() != 0 {
        return Err(WispError::MalformedSpec(
            "stale animators visible during construction".into(),
        ));
    }
    Ok(())
}

/// Builder that fails halfway through.
fn broken_scene(ctx: &mut SceneContext<'_>) -> Result<()> {
    let node = ctx.scene.build_node("doomed").build();
    ctx.register(
        node,
        AnimatorSpec::Orbit(OrbitSpec {
            radius: f32::NAN,
            ..OrbitSpec::default()
        }),
    )?;
    Ok(())
}

// ============================================================================
// Lifecycle state machine
// ============================================================================

#[test]
fn engine_starts_empty() {
    let engine = Engine::new();
    assert!(engine.scene().is_none());
    assert_eq!(engine.animator_count(), 0);
    assert_eq!(engine.current_scene_name(), None);
}

#[test]
fn tick_while_empty_is_a_noop() {
    let mut engine = Engine::new();
    engine.tick(1.0);
    engine.tick(2.0);
    assert!(engine.scene().is_none());
    assert_eq!(engine.frame_count(), 2);
}

#[test]
fn register_while_empty_is_rejected() {
    let mut engine = Engine::new();
    let err = engine
        .register_animator(
            NodeHandle::default(),
            AnimatorSpec::Orbit(OrbitSpec::default()),
        )
        .unwrap_err();
    assert!(matches!(err, WispError::NoActiveScene), "got {err:?}");
}

#[test]
fn clear_scene_empties_everything() {
    let mut engine = Engine::new();
    engine.load_scene("haunted").unwrap();
    assert!(engine.animator_count() > 0);

    engine.clear_scene();
    assert!(engine.scene().is_none());
    assert_eq!(engine.animator_count(), 0);
    assert_eq!(engine.current_scene_name(), None);

    // Tick right after clear: nothing to mutate, nothing to panic on.
    engine.tick(10.0);
}

#[test]
fn construction_failure_falls_back_to_empty() {
    let mut engine = Engine::new();
    engine.library_mut().insert("broken", "Broken", broken_scene);

    let err = engine.load_scene("broken").unwrap_err();
    assert!(matches!(err, WispError::MalformedSpec(_)), "got {err:?}");
    assert!(engine.scene().is_none(), "partial scene must not survive");
    assert_eq!(engine.animator_count(), 0);
}

#[test]
fn old_animators_are_gone_before_construction_begins() {
    let mut engine = Engine::new();
    engine
        .library_mut()
        .insert("clean-slate", "Clean slate", assert_clean_slate);

    engine.load_scene("haunted").unwrap();
    assert!(engine.animator_count() > 0);

    // The builder itself verifies the registry is empty at entry.
    engine.load_scene("clean-slate").unwrap();
}

// ============================================================================
// Demo scene registration counts
// ============================================================================

#[test]
fn basic_scene_registers_expected_animators() {
    let mut engine = Engine::new();
    engine.load_scene("basic").unwrap();
    // Three tumbling shapes + one orbiting point light.
    assert_eq!(engine.animator_count(), 4);
    assert_eq!(engine.current_scene_name(), Some("basic"));
}

#[test]
fn shadows_scene_registers_expected_animators() {
    let mut engine = Engine::new();
    engine.load_scene("shadows").unwrap();
    // Bouncing sphere, two spinners, one orbiting light.
    assert_eq!(engine.animator_count(), 4);
}

#[test]
fn haunted_scene_registers_expected_animators() {
    let mut engine = Engine::new();
    engine.load_scene("haunted").unwrap();
    // 2 windows + tower + porch + 4 ghosts + 5 crows + 8 bats.
    assert_eq!(engine.animator_count(), 21);

    let scene = engine.scene().unwrap();
    assert!(scene.find_node("Crow 4").is_some());
    assert!(scene.find_node("Bat 7").is_some());
    assert!(scene.environment.fog.is_some(), "haunted scene needs fog");
}

#[test]
fn materials_scene_registers_no_animators() {
    let mut engine = Engine::new();
    engine.load_scene("materials").unwrap();
    assert_eq!(engine.animator_count(), 0);
    assert!(engine.scene().is_some(), "populated even without animators");

    // Ticking a populated-but-still scene is fine.
    engine.tick(0.5);
}

#[test]
fn crows_carry_two_wing_limbs() {
    let mut engine = Engine::new();
    engine.load_scene("haunted").unwrap();
    let scene = engine.scene().unwrap();

    let crow = scene.find_node("Crow 0").unwrap();
    assert_eq!(scene.get_node(crow).unwrap().children().len(), 2);
    assert!(scene.find_node("Crow 0 left wing").is_some());
    assert!(scene.find_node("Crow 0 right wing").is_some());
}

#[test]
fn haunted_creatures_move_on_tick() {
    let mut engine = Engine::with_seed(3);
    engine.load_scene("haunted").unwrap();

    let crow = engine.scene().unwrap().find_node("Crow 0").unwrap();
    engine.tick(0.0);
    let before = engine.scene().unwrap().get_node(crow).unwrap().transform.position;
    engine.tick(1.0);
    let after = engine.scene().unwrap().get_node(crow).unwrap().transform.position;

    assert!((before - after).length() > EPSILON, "crow never moved");
}

#[test]
fn seeded_engines_spawn_identical_flocks() {
    let spawn_positions = |seed: u64| -> Vec<glam::Vec3> {
        let mut engine = Engine::with_seed(seed);
        engine.load_scene("haunted").unwrap();
        engine.tick(0.0);
        let scene = engine.scene().unwrap();
        (0..8)
            .map(|i| {
                let bat = scene.find_node(&format!("Bat {i}")).unwrap();
                scene.get_node(bat).unwrap().transform.position
            })
            .collect()
    };

    assert_eq!(spawn_positions(11), spawn_positions(11));
}

// ============================================================================
// Unknown scene fallback
// ============================================================================

#[test]
fn unknown_scene_falls_back_to_default() {
    let mut engine = Engine::new();
    let err = engine.load_scene("does-not-exist").unwrap_err();
    assert!(matches!(err, WispError::UnknownScene(_)), "got {err:?}");

    // The engine is usable on the default scene, not empty.
    assert_eq!(engine.current_scene_name(), Some(DEFAULT_SCENE));
    assert!(engine.animator_count() > 0);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn export_requires_a_scene() {
    let engine = Engine::new();
    let err = engine.export_settings().unwrap_err();
    assert!(matches!(err, WispError::NoActiveScene), "got {err:?}");
}

#[test]
fn export_captures_scene_and_camera() {
    let mut engine = Engine::new();
    engine.load_scene("basic").unwrap();

    let settings = engine.export_settings().unwrap();
    assert_eq!(settings.scene, "basic");
    let camera = settings.camera.expect("camera pose missing");
    assert!((camera[0] - 4.0).abs() < EPSILON);
    assert!((camera[1] - 3.0).abs() < EPSILON);
    assert!((camera[2] - 6.0).abs() < EPSILON);
}

#[test]
fn import_reselects_scene_by_name() {
    let mut engine = Engine::new();
    engine.load_scene("haunted").unwrap();
    assert_eq!(engine.animator_count(), 21);

    engine.import_settings(r#"{ "scene": "shadows" }"#).unwrap();

    // Prior-scene animators are discarded; only the shadows batch remains.
    assert_eq!(engine.current_scene_name(), Some("shadows"));
    assert_eq!(engine.animator_count(), 4);
}

#[test]
fn import_applies_camera_position() {
    let mut engine = Engine::new();
    engine
        .import_settings(r#"{ "scene": "basic", "camera": [1.0, 2.0, 3.0] }"#)
        .unwrap();

    let scene = engine.scene().unwrap();
    let cam = scene.active_camera.unwrap();
    let pos = scene.get_node(cam).unwrap().transform.position;
    assert!((pos - glam::Vec3::new(1.0, 2.0, 3.0)).length() < EPSILON);
}

#[test]
fn import_with_unknown_scene_reports_and_falls_back() {
    let mut engine = Engine::new();
    let err = engine
        .import_settings(r#"{ "scene": "attic" }"#)
        .unwrap_err();
    assert!(matches!(err, WispError::UnknownScene(_)), "got {err:?}");
    assert_eq!(engine.current_scene_name(), Some(DEFAULT_SCENE));
}

#[test]
fn import_rejects_malformed_json() {
    let mut engine = Engine::new();
    let err = engine.import_settings("{ not json").unwrap_err();
    assert!(matches!(err, WispError::Json(_)), "got {err:?}");
    assert!(engine.scene().is_none(), "bad JSON must not load anything");
}

#[test]
fn settings_round_trip_through_json() {
    let original = Settings {
        scene: "haunted".to_string(),
        camera: Some([6.0, 3.0, 8.0]),
    };
    let json = original.to_json().unwrap();
    let parsed = Settings::from_json(&json).unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn settings_camera_field_is_optional() {
    let parsed = Settings::from_json(r#"{ "scene": "basic" }"#).unwrap();
    assert_eq!(parsed.scene, "basic");
    assert_eq!(parsed.camera, None);
}

// ============================================================================
// Custom library entries
// ============================================================================

#[test]
fn hosts_can_register_their_own_scenes() {
    let mut engine = Engine::new();
    engine.library_mut().insert("void", "The Void", empty_scene);

    engine.load_scene("void").unwrap();
    assert_eq!(engine.current_scene_name(), Some("void"));
    assert_eq!(engine.animator_count(), 0);
    assert!(engine.scene().unwrap().find_node("probe").is_some());
}

#[test]
fn library_reports_titles() {
    let engine = Engine::new();
    assert_eq!(engine.library().title("haunted"), Some("Haunted House"));
    assert_eq!(engine.library().title("attic"), None);
    assert!(engine.library().contains("basic"));
}

#[test]
fn registering_against_live_scene_works() {
    let mut engine = Engine::new();
    engine.library_mut().insert("void", "The Void", empty_scene);
    engine.load_scene("void").unwrap();

    let probe = engine.scene().unwrap().find_node("probe").unwrap();
    engine
        .register_animator(
            probe,
            AnimatorSpec::Orbit(OrbitSpec {
                radius: 3.0,
                angular_speed: 0.0,
                base_height: 2.0,
                ..OrbitSpec::default()
            }),
        )
        .unwrap();

    for t in [0.0, 1.0, 2.0] {
        engine.tick(t);
        let scene = engine.scene().unwrap();
        let pos = scene.get_node(probe).unwrap().transform.position;
        assert!(
            (pos - glam::Vec3::new(3.0, 2.0, 0.0)).length() < EPSILON,
            "t={t}: expected (3, 2, 0), got {pos:?}"
        );
    }
}
