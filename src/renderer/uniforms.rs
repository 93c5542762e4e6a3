//! Per-draw uniform block.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::scene::{Camera, DrawCall};

/// `mat3x3<f32>` as WGSL lays it out inside a uniform block: three
/// vec4-aligned columns, the fourth lane of each column ignored by the GPU.
/// glam's matrix types do not carry that padding, so the block stores this
/// wrapper instead.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PackedMat3 {
    pub cols: [Vec4; 3],
}

impl PackedMat3 {
    #[must_use]
    pub fn from_mat3(m: Mat3) -> Self {
        Self {
            cols: [
                m.x_axis.extend(0.0),
                m.y_axis.extend(0.0),
                m.z_axis.extend(0.0),
            ],
        }
    }
}

/// Everything one draw call binds, packed to exactly 256 bytes so the
/// stride equals wgpu's default dynamic-offset alignment and one buffer
/// write per frame covers the whole scene.
///
/// Layout mirrors the WGSL `DrawUniforms` struct: the normal matrix is a
/// [`PackedMat3`] and every `vec3` slot is padded out to 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DrawUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
    pub normal_matrix: PackedMat3,
    pub material_color: Vec3,
    pub _pad0: f32,
    /// `(ka, kd, ks, shininess)`.
    pub material_coefficients: Vec4,
    pub light_position: Vec3,
    pub _pad1: f32,
    pub light_color: Vec3,
    pub _pad2: f32,
    pub camera_position: Vec3,
    pub _pad3: f32,
}

// Dynamic-offset stride; must match min_uniform_buffer_offset_alignment.
pub const DRAW_UNIFORMS_SIZE: u64 = std::mem::size_of::<DrawUniforms>() as u64;

impl DrawUniforms {
    #[must_use]
    pub fn from_draw(call: &DrawCall, camera: &Camera) -> Self {
        Self {
            mvp: call.mvp,
            model: call.model,
            normal_matrix: PackedMat3::from_mat3(call.normal_matrix),
            material_color: call.material.color,
            _pad0: 0.0,
            material_coefficients: Vec4::new(
                call.material.ka,
                call.material.kd,
                call.material.ks,
                call.material.shininess,
            ),
            light_position: call.light.position,
            _pad1: 0.0,
            light_color: call.light.color,
            _pad2: 0.0,
            camera_position: camera.position(),
            _pad3: 0.0,
        }
    }
}
