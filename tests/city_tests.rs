//! City Tests
//!
//! Tests for:
//! - Scene layout produced by build_city
//! - App frame loop driving the sphere
//! - Resize handling and frustum counting in LogRenderer
//! - CitySettings defaults, JSON parsing and validation

use glam::Vec3;

use lowpoly_city::app::{App, LogRenderer};
use lowpoly_city::city::{ROAD_HEIGHT, SPHERE_START, build_city};
use lowpoly_city::errors::CityError;
use lowpoly_city::scene::LightKind;
use lowpoly_city::settings::CitySettings;

fn approx_vec(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() < tolerance
}

fn default_app() -> App<LogRenderer> {
    App::new(&CitySettings::default(), LogRenderer::new()).unwrap()
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn city_contains_every_object() {
    let city = build_city(&CitySettings::default()).unwrap();
    let scene = &city.scene;

    // camera + ground + 4 buildings + 6 roads + sphere
    assert_eq!(scene.nodes.len(), 13);
    assert_eq!(scene.meshes.len(), 12);
    assert_eq!(scene.lights.len(), 2);
    assert_eq!(scene.players().len(), 1);

    for name in [
        "Ground",
        "Building1",
        "Building2",
        "Building3",
        "Building4",
        "MainRoad",
        "Road1",
        "Road2",
        "Road3",
        "Road4",
        "CircularRoad",
        "Sphere",
    ] {
        assert!(scene.find_node_by_name(name).is_some(), "missing {name}");
    }
}

#[test]
fn sphere_waits_at_its_start_until_the_first_frame() {
    let city = build_city(&CitySettings::default()).unwrap();
    let sphere = city.scene.get_node(city.sphere).unwrap();
    assert_eq!(sphere.transform.position, SPHERE_START);
    assert_eq!(city.scene.find_node_by_name("Sphere"), Some(city.sphere));
}

#[test]
fn buildings_and_roads_are_placed() {
    let city = build_city(&CitySettings::default()).unwrap();
    let scene = &city.scene;
    let node = |name: &str| scene.get_node(scene.find_node_by_name(name).unwrap()).unwrap();

    let building2 = node("Building2");
    assert_eq!(building2.transform.position, Vec3::new(-12.75, 3.0, 21.5));
    assert!((building2.transform.rotation_euler().y + 1.0).abs() < 1e-4);

    for road in ["MainRoad", "Road1", "Road2", "Road3", "Road4", "CircularRoad"] {
        assert_eq!(node(road).transform.position.y, ROAD_HEIGHT, "{road}");
    }

    // Ground is laid flat: its local +Z normal now points up.
    let ground_normal = node("Ground").transform.rotation * Vec3::Z;
    assert!(approx_vec(ground_normal, Vec3::Y, 1e-5));
}

#[test]
fn lights_match_the_stock_scene() {
    let city = build_city(&CitySettings::default()).unwrap();
    let lights = &city.scene.lights;
    assert!(matches!(lights[0].kind, LightKind::Ambient));
    assert!((lights[0].intensity - 1.5).abs() < 1e-6);
    assert!(matches!(
        lights[1].kind,
        LightKind::Point { position, .. } if position == Vec3::new(0.0, 20.0, 10.0)
    ));
}

#[test]
fn camera_starts_at_configured_position() {
    let city = build_city(&CitySettings::default()).unwrap();
    assert!(approx_vec(
        city.scene.camera.position(),
        Vec3::new(0.0, 30.0, 50.0),
        1e-3
    ));
}

#[test]
fn invalid_settings_abort_construction() {
    let settings = CitySettings {
        animation_speed: 0.0,
        ..CitySettings::default()
    };
    assert!(matches!(
        build_city(&settings),
        Err(CityError::InvalidSettings(_))
    ));
}

// ============================================================================
// App
// ============================================================================

#[test]
fn one_second_moves_the_sphere_a_fifth_of_the_way_round() {
    let mut app = default_app();
    app.run_frames(60, 1.0 / 60.0).unwrap();

    let angle = 72f32.to_radians();
    let expected = Vec3::new(7.5 * angle.cos(), 1.0, 2.0 + 7.5 * angle.sin());
    assert!(approx_vec(app.sphere_position().unwrap(), expected, 1e-3));
    assert_eq!(app.frame_count(), 60);
    assert_eq!(app.renderer.frames(), 60);
    assert!((app.elapsed() - 1.0).abs() < 1e-4);
}

#[test]
fn animation_speed_scales_playback() {
    let settings = CitySettings {
        animation_speed: 2.0,
        ..CitySettings::default()
    };
    let mut app = App::new(&settings, LogRenderer::new()).unwrap();
    app.run_frames(10, 0.25).unwrap();

    // 2.5s of frames at double speed lands on the end of the orbit.
    assert!(approx_vec(
        app.sphere_position().unwrap(),
        Vec3::new(7.5, 1.0, 2.0),
        1e-3
    ));
}

#[test]
fn sphere_loops_forever() {
    let mut app = default_app();
    app.run_frames(44, 0.5).unwrap();
    assert!(approx_vec(
        app.sphere_position().unwrap(),
        Vec3::new(7.5, 1.0, 2.0),
        1e-3
    ));
}

#[test]
fn renderer_sees_meshes_from_the_default_camera() {
    let mut app = default_app();
    app.frame(1.0 / 60.0).unwrap();
    let visible = app.renderer.last_visible();
    assert!(visible > 0);
    assert!(visible <= app.city.scene.meshes.len());
}

#[test]
fn resize_updates_camera_aspect() {
    let mut app = default_app();
    app.resize(1920, 1080);
    assert!((app.city.scene.camera.aspect - 16.0 / 9.0).abs() < 1e-5);
    assert_eq!(app.input.screen_size, glam::Vec2::new(1920.0, 1080.0));

    app.resize(0, 1080);
    assert!((app.city.scene.camera.aspect - 16.0 / 9.0).abs() < 1e-5);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn default_settings_are_valid() {
    let settings = CitySettings::default();
    assert!(settings.validate().is_ok());
    assert!((settings.aspect() - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn partial_json_keeps_defaults() {
    let settings = CitySettings::from_json_str(
        r#"{ "animation_speed": 0.5, "camera_position": [10.0, 20.0, 30.0] }"#,
    )
    .unwrap();
    assert_eq!(settings.animation_speed, 0.5);
    assert_eq!(settings.camera_position, Vec3::new(10.0, 20.0, 30.0));
    assert_eq!(settings.width, 1280);
    assert!(!settings.enable_damping);
}

#[test]
fn inverted_clip_planes_are_rejected() {
    let err = CitySettings::from_json_str(r#"{ "near": 10.0, "far": 1.0 }"#).unwrap_err();
    assert!(matches!(err, CityError::InvalidSettings(_)));
}

#[test]
fn malformed_json_is_reported() {
    let err = CitySettings::from_json_str("{ width: ").unwrap_err();
    assert!(matches!(err, CityError::JsonError(_)));
}

#[test]
fn missing_settings_file_is_reported() {
    let err = CitySettings::load("/definitely/not/here/city.json").unwrap_err();
    assert!(matches!(err, CityError::IoError(_)));
}

#[test]
fn settings_load_from_file() {
    let path = std::env::temp_dir().join(format!("lowpoly_city_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "width": 800, "height": 600, "enable_damping": true }"#).unwrap();

    let settings = CitySettings::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!((settings.width, settings.height), (800, 600));
    assert!(settings.enable_damping);
    assert_eq!(settings.fov_degrees, 75.0);
}

#[test]
fn real_time_loop_runs_until_duration_elapses() {
    let mut app = default_app();
    app.run_for(std::time::Duration::from_millis(20)).unwrap();
    assert!(app.frame_count() > 0);
    assert_eq!(app.renderer.frames(), app.frame_count());
}
