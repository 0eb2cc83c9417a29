use crate::resources::geometry::MeshData;

/// Axis-aligned box centred on the origin, 4 vertices per face.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> MeshData {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // (normal, four corners in CCW order seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front (+Z)
        ([0.0, 0.0, 1.0], [[-w, -h, d], [w, -h, d], [w, h, d], [-w, h, d]]),
        // Back (-Z)
        ([0.0, 0.0, -1.0], [[w, -h, -d], [-w, -h, -d], [-w, h, -d], [w, h, -d]]),
        // Top (+Y)
        ([0.0, 1.0, 0.0], [[-w, h, d], [w, h, d], [w, h, -d], [-w, h, -d]]),
        // Bottom (-Y)
        ([0.0, -1.0, 0.0], [[-w, -h, -d], [w, -h, -d], [w, -h, d], [-w, -h, d]]),
        // Right (+X)
        ([1.0, 0.0, 0.0], [[w, -h, d], [w, -h, -d], [w, h, -d], [w, h, d]]),
        // Left (-X)
        ([-1.0, 0.0, 0.0], [[-w, -h, -d], [-w, -h, d], [-w, h, d], [-w, h, -d]]),
    ];
    let face_uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    for (normal, corners) in faces {
        positions.extend(corners);
        normals.extend([normal; 4]);
        uvs.extend(face_uvs);
    }

    // 2 triangles per face: 0, 1, 2,  0, 2, 3
    let indices: Vec<u32> = (0..6)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    MeshData::new(positions, normals, uvs, indices)
}
