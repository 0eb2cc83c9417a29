use std::f32::consts::TAU;

use crate::resources::geometry::MeshData;

pub struct CircleOptions {
    pub radius: f32,
    pub segments: u32,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 32,
        }
    }
}

/// Triangle fan in the XY plane facing +Z: one centre vertex followed by
/// `segments + 1` rim vertices (the seam vertex is duplicated for UVs).
#[must_use]
pub fn create_circle(options: &CircleOptions) -> MeshData {
    let radius = options.radius;
    let segments = options.segments.max(3);

    let mut positions = vec![[0.0, 0.0, 0.0]];
    let mut normals = vec![[0.0, 0.0, 1.0]];
    let mut uvs = vec![[0.5, 0.5]];

    for s in 0..=segments {
        let angle = s as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        positions.push([radius * cos, radius * sin, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([(cos + 1.0) / 2.0, (sin + 1.0) / 2.0]);
    }

    let indices = (1..=segments).flat_map(|i| [i, i + 1, 0]).collect();

    MeshData::new(positions, normals, uvs, indices)
}
