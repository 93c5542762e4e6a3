//! Asset Server
//!
//! Central CPU-side storage for shared, read-only resources: the sphere
//! geometry every body references and the decoded texture images. Resources
//! are addressed by stable slotmap handles; nodes never own them.
//!
//! Everything is loaded once at startup and uploaded to the GPU by the
//! renderer before the animation loop starts. A missing or undecodable image
//! file is a fatal error — there is no fallback texture for a body.

use std::path::Path;

use slotmap::{new_key_type, SlotMap};

use crate::errors::{AstrofallError, Result};
use crate::resources::Geometry;

new_key_type! {
    pub struct GeometryHandle;
    pub struct TextureHandle;
}

/// A decoded RGBA8 image ready for GPU upload.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub label: String,
}

/// CPU-side resource storage.
#[derive(Default)]
pub struct AssetServer {
    geometries: SlotMap<GeometryHandle, Geometry>,
    images: SlotMap<TextureHandle, Image>,
}

impl AssetServer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryHandle {
        self.geometries.insert(geometry)
    }

    #[must_use]
    pub fn get_geometry(&self, handle: GeometryHandle) -> Option<&Geometry> {
        self.geometries.get(handle)
    }

    /// Loads and decodes an image file into RGBA8.
    pub fn load_texture_from_file(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle> {
        let path = path.as_ref();
        let dynamic = image::open(path).map_err(|e| AstrofallError::TextureLoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let rgba = dynamic.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("Loaded texture {} ({width}x{height})", path.display());

        Ok(self.images.insert(Image {
            width,
            height,
            pixels: rgba.into_raw(),
            label: path.display().to_string(),
        }))
    }

    #[must_use]
    pub fn get_image(&self, handle: TextureHandle) -> Option<&Image> {
        self.images.get(handle)
    }

    pub fn iter_images(&self) -> impl Iterator<Item = (TextureHandle, &Image)> {
        self.images.iter()
    }

    pub fn iter_geometries(&self) -> impl Iterator<Item = (GeometryHandle, &Geometry)> {
        self.geometries.iter()
    }
}
