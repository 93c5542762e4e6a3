//! Triangle-list geometry with planar attribute blocks.
//!
//! Vertex data is kept as three separate attribute arrays and uploaded as one
//! vertex buffer holding three contiguous blocks (positions, then normals,
//! then UVs). The renderer binds each block as its own vertex-buffer slot.

/// Non-indexed triangle-list geometry.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
}

impl Geometry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices (three per triangle).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Byte offsets of the three attribute blocks inside the packed buffer:
    /// `(positions, normals, uvs)`.
    #[must_use]
    pub fn block_offsets(&self) -> (u64, u64, u64) {
        let n = self.positions.len() as u64;
        (0, n * 12, n * (12 + 12))
    }

    /// Packs the attribute arrays into one contiguous byte buffer,
    /// positions first, then normals, then UVs.
    #[must_use]
    pub fn packed_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.positions.len() * (12 + 12 + 8));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.positions));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.normals));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.uvs));
        bytes
    }
}
