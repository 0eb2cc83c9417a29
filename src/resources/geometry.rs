use glam::{Affine3A, Vec3};

use crate::resources::primitives::{
    CircleOptions, PlaneOptions, SphereOptions, create_box, create_circle, create_plane,
    create_sphere,
};

/// Shape descriptor of a mesh.
///
/// Descriptors are cheap to copy and compare; vertex data is generated on
/// demand with [`Geometry::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Rectangle in the local XY plane, facing +Z.
    Plane { width: f32, height: f32 },
    Box { width: f32, height: f32, depth: f32 },
    /// Disc in the local XY plane, facing +Z.
    Circle { radius: f32, segments: u32 },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Geometry {
    /// Generates CPU-side vertex data.
    #[must_use]
    pub fn build(&self) -> MeshData {
        match *self {
            Geometry::Plane { width, height } => create_plane(&PlaneOptions {
                width,
                height,
                ..Default::default()
            }),
            Geometry::Box {
                width,
                height,
                depth,
            } => create_box(width, height, depth),
            Geometry::Circle { radius, segments } => {
                create_circle(&CircleOptions { radius, segments })
            }
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => create_sphere(&SphereOptions {
                radius,
                width_segments,
                height_segments,
            }),
        }
    }

    /// Local-space bounds, computed analytically.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let half = match *self {
            Geometry::Plane { width, height } => Vec3::new(width, height, 0.0) * 0.5,
            Geometry::Box {
                width,
                height,
                depth,
            } => Vec3::new(width, height, depth) * 0.5,
            Geometry::Circle { radius, .. } => Vec3::new(radius, radius, 0.0),
            Geometry::Sphere { radius, .. } => Vec3::splat(radius),
        };
        BoundingBox {
            min: -half,
            max: half,
        }
    }
}

/// Generated vertex data: planar attributes plus a triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub bounding_box: BoundingBox,
}

impl MeshData {
    pub(crate) fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        uvs: Vec<[f32; 2]>,
        indices: Vec<u32>,
    ) -> Self {
        let bounding_box = BoundingBox::from_points(positions.iter().map(|p| Vec3::from(*p)));
        Self {
            positions,
            normals,
            uvs,
            indices,
            bounding_box,
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Smallest box containing every point. Empty input gives a zero box.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;
        for p in points {
            min = min.min(p);
            max = max.max(p);
            any = true;
        }
        if any { Self { min, max } } else { Self::default() }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Axis-aligned bounds of this box after `matrix`.
    #[must_use]
    pub fn transform(&self, matrix: &Affine3A) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];
        Self::from_points(corners.into_iter().map(|c| matrix.transform_point3(c)))
    }
}
