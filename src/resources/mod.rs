//! Shared CPU-side resource data model: geometry buffers, materials, and the
//! sphere primitive every body in the scene reuses.

pub mod geometry;
pub mod material;
pub mod primitives;

pub use geometry::Geometry;
pub use material::Material;
