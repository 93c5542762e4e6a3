//! Renderer configuration.
//!
//! One struct consumed once at startup. The scene has a fixed window size
//! and frame rate; everything else here exists so the GPU context can be
//! set up the same way on every backend.

use std::path::PathBuf;

/// Global configuration for renderer initialization.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Window and surface width in pixels.
    pub width: u32,
    /// Window and surface height in pixels.
    pub height: u32,
    /// Frame-pacing target. Work finishing early sleeps the remainder;
    /// overruns are not compensated.
    pub target_fps: u32,

    /// Enable vertical synchronization.
    pub vsync: bool,
    /// GPU adapter selection preference.
    pub power_preference: wgpu::PowerPreference,
    /// Background clear color.
    pub clear_color: wgpu::Color,
    /// Required wgpu features; initialization fails if unavailable.
    pub required_features: wgpu::Features,
    /// Required wgpu limits.
    pub required_limits: wgpu::Limits,
    /// Depth buffer texture format.
    pub depth_format: wgpu::TextureFormat,

    /// WGSL shader source path, read at startup.
    pub shader_path: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            target_fps: 60,
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            clear_color: wgpu::Color::BLACK,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            depth_format: wgpu::TextureFormat::Depth32Float,
            shader_path: PathBuf::from("shaders/scene.wgsl"),
        }
    }
}

impl RenderSettings {
    /// Width/height ratio for the camera projection.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
