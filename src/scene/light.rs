use glam::Vec3;

/// The single global light source.
///
/// One position+color pair, identical across all nodes; it is copied by
/// value onto each node at assembly and submitted with every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    #[must_use]
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

impl Default for Light {
    fn default() -> Self {
        // The sun sits at the origin and lights everything white.
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}
