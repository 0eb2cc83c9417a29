//! Camera & Controls Tests
//!
//! Tests for:
//! - Perspective projection and aspect updates
//! - Frustum sphere culling
//! - Pointer input bookkeeping
//! - Orbit controls: rotate, zoom, pan, damping

use std::f32::consts::PI;

use glam::{Affine3A, Vec2, Vec3};

use lowpoly_city::app::{Input, PointerButton};
use lowpoly_city::scene::{Camera, Frustum, Transform};
use lowpoly_city::utils::OrbitControls;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn projection_tracks_aspect() {
    let mut camera = Camera::new_perspective(90.0, 1.0, 0.1, 100.0);
    // cot(45°) / aspect
    assert!(approx(camera.projection_matrix().x_axis.x, 1.0));

    camera.set_aspect(2.0);
    assert!(approx(camera.projection_matrix().x_axis.x, 0.5));
    assert!(approx(camera.fov_degrees(), 90.0));
}

#[test]
fn view_matrix_is_inverse_of_camera_world() {
    let mut camera = Camera::new_perspective(75.0, 1.0, 0.1, 100.0);
    let world = Affine3A::from_translation(Vec3::new(0.0, 5.0, 10.0));
    camera.update_view_projection(&world);

    assert!(approx_vec(camera.position(), Vec3::new(0.0, 5.0, 10.0)));
    let origin_in_view = camera.view_matrix().transform_point3(Vec3::new(0.0, 5.0, 10.0));
    assert!(approx_vec(origin_in_view, Vec3::ZERO));
}

// ============================================================================
// Frustum
// ============================================================================

fn camera_at_origin_looking_down_negative_z() -> Camera {
    let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 100.0);
    camera.update_view_projection(&Affine3A::IDENTITY);
    camera
}

#[test]
fn sphere_in_front_is_visible() {
    let camera = camera_at_origin_looking_down_negative_z();
    assert!(camera.frustum().intersects_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0));
}

#[test]
fn spheres_outside_are_culled() {
    let camera = camera_at_origin_looking_down_negative_z();
    let frustum: &Frustum = camera.frustum();

    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0), "behind");
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, -200.0), 1.0), "past far");
    assert!(!frustum.intersects_sphere(Vec3::new(50.0, 0.0, -10.0), 1.0), "right");
}

#[test]
fn sphere_straddling_a_plane_is_visible() {
    let camera = camera_at_origin_looking_down_negative_z();
    // tan(30°) * 10 ≈ 5.77 is the half width at z = -10
    assert!(camera.frustum().intersects_sphere(Vec3::new(7.0, 0.0, -10.0), 2.0));
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn first_cursor_move_has_no_delta() {
    let mut input = Input::new();
    input.handle_cursor_move(100.0, 100.0);
    assert_eq!(input.cursor_delta, Vec2::ZERO);

    input.handle_cursor_move(110.0, 95.0);
    assert_eq!(input.cursor_delta, Vec2::new(10.0, -5.0));

    input.end_frame();
    assert_eq!(input.cursor_delta, Vec2::ZERO);
    assert_eq!(input.cursor_position, Vec2::new(110.0, 95.0));
}

#[test]
fn buttons_and_scroll_are_tracked() {
    let mut input = Input::new();
    input.handle_button(PointerButton::Primary, true);
    assert!(input.is_button_pressed(PointerButton::Primary));
    assert!(!input.is_button_pressed(PointerButton::Secondary));
    input.handle_button(PointerButton::Primary, false);
    assert!(!input.is_button_pressed(PointerButton::Primary));

    input.handle_scroll(Vec2::new(0.0, 1.0));
    input.handle_scroll(Vec2::new(0.0, 2.0));
    assert_eq!(input.scroll_delta.y, 3.0);
}

// ============================================================================
// Orbit controls
// ============================================================================

fn city_controls() -> (OrbitControls, Transform, Input) {
    let eye = Vec3::new(0.0, 30.0, 50.0);
    let controls = OrbitControls::from_position(eye, Vec3::ZERO);
    let transform = Transform::from_position(eye);
    let mut input = Input::new();
    input.handle_resize(1280, 720);
    (controls, transform, input)
}

#[test]
fn from_position_reproduces_eye() {
    let (controls, _, _) = city_controls();
    assert!((controls.radius - 58.309_52).abs() < 1e-3);
    assert!(approx(controls.theta, 0.0));
    assert!(approx_vec(controls.eye_position(), Vec3::new(0.0, 30.0, 50.0)));
}

#[test]
fn idle_update_keeps_camera_in_place_and_looking_at_center() {
    let (mut controls, mut transform, input) = city_controls();
    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);

    assert!(approx_vec(transform.position, Vec3::new(0.0, 30.0, 50.0)));
    let forward = transform.rotation * Vec3::NEG_Z;
    assert!(approx_vec(forward, (-transform.position).normalize()));
}

#[test]
fn primary_drag_rotates_around_center() {
    let (mut controls, mut transform, mut input) = city_controls();
    input.handle_button(PointerButton::Primary, true);
    input.handle_cursor_move(640.0, 360.0);
    input.handle_cursor_move(712.0, 360.0);

    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);

    // 72 px of a 720 px tall screen is a tenth of a full turn.
    assert!(approx(controls.theta, -0.2 * PI));
    assert!((transform.position.length() - controls.radius).abs() < 1e-3);
}

#[test]
fn scroll_zooms_in() {
    let (mut controls, mut transform, mut input) = city_controls();
    let radius = controls.radius;
    input.handle_scroll(Vec2::new(0.0, 1.0));
    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
    assert!((controls.radius - radius * 0.95).abs() < 1e-3);

    input.end_frame();
    input.handle_scroll(Vec2::new(0.0, -1.0));
    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
    assert!((controls.radius - radius).abs() < 1e-3);
}

#[test]
fn zoom_is_clamped_to_min_distance() {
    let (mut controls, mut transform, mut input) = city_controls();
    input.handle_scroll(Vec2::new(0.0, 500.0));
    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
    assert!(approx(controls.radius, controls.min_distance));
}

#[test]
fn secondary_drag_pans_center_and_eye_together() {
    let (mut controls, mut transform, mut input) = city_controls();
    let radius = controls.radius;
    input.handle_button(PointerButton::Secondary, true);
    input.handle_cursor_move(640.0, 360.0);
    input.handle_cursor_move(600.0, 380.0);

    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);

    assert!(controls.center.length() > 0.1);
    assert!(approx(controls.radius, radius));
    assert!(((transform.position - controls.center).length() - radius).abs() < 1e-3);
}

#[test]
fn damping_spreads_rotation_over_frames() {
    let (mut controls, mut transform, mut input) = city_controls();
    controls.enable_damping = true;
    input.handle_button(PointerButton::Primary, true);
    input.handle_cursor_move(640.0, 360.0);
    input.handle_cursor_move(712.0, 360.0);

    controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
    let first = controls.theta;
    assert!(first < 0.0 && first > -0.2 * PI);

    input.end_frame();
    for _ in 0..600 {
        controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
    }
    assert!((controls.theta + 0.2 * PI).abs() < 1e-3);
}
