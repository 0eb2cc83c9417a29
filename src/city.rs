//! The low-poly city.
//!
//! Builds the complete scene in one shot: ground, four buildings, the road
//! network, two lights, the camera and a red sphere that loops around the
//! roundabout and out along two side streets.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::Vec3;
use log::info;

use crate::animation::{Easing, Timeline, TimelinePlayer};
use crate::errors::Result;
use crate::resources::{Geometry, Material, Mesh, Side};
use crate::scene::{Camera, Light, NodeHandle, Scene, Transform};
use crate::settings::CitySettings;
use crate::utils::OrbitControls;

pub const GROUND_COLOR: u32 = 0x6b_8e_23;
pub const BUILDING_COLOR: u32 = 0xff_ff_ff;
pub const ROAD_COLOR: u32 = 0x33_33_33;
pub const SPHERE_COLOR: u32 = 0xff_00_00;

/// Roads sit slightly above the ground to avoid z-fighting.
pub const ROAD_HEIGHT: f32 = 0.01;

/// Where the sphere is placed before the timeline first runs.
pub const SPHERE_START: Vec3 = Vec3::new(7.5, 1.0, 0.0);
/// Centre of the roundabout in the XZ plane.
pub const ROUNDABOUT_CENTER: Vec3 = Vec3::new(0.0, ROAD_HEIGHT, 2.0);
pub const ROUNDABOUT_RADIUS: f32 = 7.5;

/// Everything the host needs to drive the city.
pub struct CityScene {
    pub scene: Scene,
    /// The animated sphere.
    pub sphere: NodeHandle,
    pub controls: OrbitControls,
}

/// The sphere's loop: one lap of the roundabout, then two eased legs.
pub fn sphere_timeline(origin: Vec3) -> Result<Timeline> {
    Timeline::builder(origin)
        .orbit(5.0, Easing::Linear, ROUNDABOUT_CENTER, ROUNDABOUT_RADIUS)
        .to(3.0, Easing::QUAD_IN_OUT, Vec3::new(0.0, 1.0, 5.0))
        .to(3.0, Easing::QUAD_IN_OUT, Vec3::new(7.5, 1.0, 5.75))
        .build()
}

pub fn build_city(settings: &CitySettings) -> Result<CityScene> {
    settings.validate()?;

    let camera = Camera::new_perspective(
        settings.fov_degrees,
        settings.aspect(),
        settings.near,
        settings.far,
    );
    let mut scene = Scene::new(camera);

    add_ground(&mut scene);
    add_buildings(&mut scene);
    add_roads(&mut scene);

    scene.add_light(Light::new_ambient(0x40_40_40, 1.5));
    scene.add_light(Light::new_point(0xff_ff_ff, 1.0, Vec3::new(0.0, 20.0, 10.0)));

    let sphere = scene.add_mesh(
        "Sphere",
        Mesh::new(
            Geometry::Sphere {
                radius: 1.0,
                width_segments: 32,
                height_segments: 32,
            },
            Material::from_hex(SPHERE_COLOR),
        ),
        Transform::from_position(SPHERE_START),
    );

    let timeline = Arc::new(sphere_timeline(SPHERE_START)?);
    scene.add_player(
        TimelinePlayer::new(timeline, sphere).with_time_scale(settings.animation_speed),
    )?;

    let mut controls = OrbitControls::from_position(settings.camera_position, Vec3::ZERO);
    controls.enable_damping = settings.enable_damping;
    if let Some(transform) = scene.camera_transform_mut() {
        transform.position = controls.eye_position();
        transform.look_at(controls.center, Vec3::Y);
    }

    scene.update_matrices();

    info!(
        "City built: {} nodes, {} meshes, {} lights",
        scene.nodes.len(),
        scene.meshes.len(),
        scene.lights.len()
    );

    Ok(CityScene {
        scene,
        sphere,
        controls,
    })
}

fn add_ground(scene: &mut Scene) {
    let mut transform = Transform::new();
    transform.set_rotation_euler(-FRAC_PI_2, 0.0, 0.0);
    scene.add_mesh(
        "Ground",
        Mesh::new(
            Geometry::Plane {
                width: 65.0,
                height: 65.0,
            },
            Material::from_hex(GROUND_COLOR).with_side(Side::Double),
        ),
        transform,
    );
}

fn add_buildings(scene: &mut Scene) {
    // (name, width, height, depth, position, rotation about Y)
    let buildings: [(&'static str, f32, f32, f32, Vec3, f32); 4] = [
        ("Building1", 9.0, 9.0, 18.0, Vec3::new(8.25, 3.0, 20.0), 0.0),
        ("Building2", 9.0, 9.0, 18.0, Vec3::new(-12.75, 3.0, 21.5), -1.0),
        ("Building3", 9.0, 9.0, 18.0, Vec3::new(20.25, 3.0, -0.25), -1.0),
        ("Building4", 9.0, 9.0, 27.0, Vec3::new(-9.0, 3.0, -18.25), 0.0),
    ];

    for (name, width, height, depth, position, rotation) in buildings {
        let mut transform = Transform::from_position(position);
        transform.set_rotation_euler(0.0, rotation, 0.0);
        scene.add_mesh(
            name,
            Mesh::new(
                Geometry::Box {
                    width,
                    height,
                    depth,
                },
                Material::from_hex(BUILDING_COLOR),
            ),
            transform,
        );
    }
}

fn add_roads(scene: &mut Scene) {
    let road_material = Material::from_hex(ROAD_COLOR).with_side(Side::Double);

    // (name, width, length, x, z, rotation about the road's normal)
    let roads: [(&'static str, f32, f32, f32, f32, f32); 5] = [
        ("MainRoad", 6.0, 72.0, 0.0, 2.75, -1.0),
        ("Road1", 4.5, 27.0, 0.0, 19.25, 0.0),
        ("Road2", 3.0, 21.0, 7.5, 5.75, 1.0),
        ("Road3", 3.0, 12.0, 15.75, 16.25, 0.0),
        ("Road4", 4.5, 30.0, -1.5, -17.5, 0.0),
    ];

    for (name, width, length, x, z, rotation) in roads {
        let mut transform = Transform::from_position(Vec3::new(x, ROAD_HEIGHT, z));
        transform.set_rotation_euler(-FRAC_PI_2, 0.0, rotation);
        scene.add_mesh(
            name,
            Mesh::new(
                Geometry::Plane {
                    width,
                    height: length,
                },
                road_material,
            ),
            transform,
        );
    }

    let mut transform = Transform::from_position(ROUNDABOUT_CENTER);
    transform.set_rotation_euler(-FRAC_PI_2, 0.0, 0.0);
    scene.add_mesh(
        "CircularRoad",
        Mesh::new(
            Geometry::Circle {
                radius: ROUNDABOUT_RADIUS,
                segments: 64,
            },
            road_material,
        ),
        transform,
    );
}
