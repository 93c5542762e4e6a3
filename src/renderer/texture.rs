//! GPU texture upload.

use crate::assets::Image;

/// Uploads a decoded RGBA8 image and returns its sampled view. The
/// underlying texture stays alive for as long as a bind group references
/// the view.
#[must_use]
pub fn upload_image(device: &wgpu::Device, queue: &wgpu::Queue, image: &Image) -> wgpu::TextureView {
    upload(
        device,
        queue,
        Some(image.label.as_str()),
        image.width,
        image.height,
        &image.pixels,
    )
}

/// 1x1 opaque white, bound for nodes that carry no texture of their own so
/// the pipeline always samples something defined.
#[must_use]
pub fn white_fallback(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    upload(device, queue, Some("White Fallback"), 1, 1, &[255; 4])
}

fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: Option<&str>,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label,
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
