use std::f32::consts::PI;

use crate::resources::Geometry;

pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 32,
        }
    }
}

/// Builds a UV sphere as a non-indexed triangle list.
///
/// Every grid cell contributes two triangles; the degenerate triangles at the
/// poles are left in, the GPU discards them.
#[must_use]
pub fn create_sphere(options: SphereOptions) -> Geometry {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);

    // Grid of vertex data, then expanded into a triangle soup below.
    let mut grid_positions = Vec::new();
    let mut grid_normals = Vec::new();
    let mut grid_uvs = Vec::new();

    for y in 0..=height_segments {
        let v_ratio = y as f32 / height_segments as f32;
        // Latitude angle: from 0 to PI (south pole to north pole)
        let theta = v_ratio * PI;

        let py = -radius * theta.cos();
        let ring_radius = radius * theta.sin();

        for x in 0..=width_segments {
            let u_ratio = x as f32 / width_segments as f32;
            // Longitude angle: from 0 to 2*PI
            let phi = u_ratio * 2.0 * PI;

            let px = -ring_radius * phi.cos();
            let pz = ring_radius * phi.sin();

            grid_positions.push([px, py, pz]);
            grid_normals.push([px / radius, py / radius, pz / radius]);
            grid_uvs.push([u_ratio, 1.0 - v_ratio]);
        }
    }

    let mut geo = Geometry::new();
    let stride = width_segments + 1;
    let mut emit = |index: u32| {
        geo.positions.push(grid_positions[index as usize]);
        geo.normals.push(grid_normals[index as usize]);
        geo.uvs.push(grid_uvs[index as usize]);
    };

    for y in 0..height_segments {
        for x in 0..width_segments {
            let v0 = y * stride + x;
            let v1 = v0 + 1;
            let v2 = (y + 1) * stride + x;
            let v3 = v2 + 1;

            emit(v0);
            emit(v1);
            emit(v2);

            emit(v1);
            emit(v3);
            emit(v2);
        }
    }

    geo
}
