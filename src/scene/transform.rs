use glam::{Affine3A, Quat, Vec3};

/// Dual-matrix rigid transform of a scene node.
///
/// Both matrices are resynthesized from identity every frame by the
/// animation driver; nothing persists between frames but the phase scalars
/// driving them.
///
/// - `propagated`: translation (orbital radius offset) composed with rotation
///   (orbital phase angle), expressed in the parent's frame. This is the only
///   matrix pushed onto the traversal stack, so it is the only part children
///   inherit.
/// - `local`: scale (and occasionally an auxiliary rotation) in the body's
///   own frame, applied after the accumulated ancestry and never inherited —
///   a parent's scale must not leak into its children.
///
/// The rendered world pose of a node is always
/// `(accumulated parent propagated) * propagated * local`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub propagated: Affine3A,
    pub local: Affine3A,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            propagated: Affine3A::IDENTITY,
            local: Affine3A::IDENTITY,
        }
    }

    /// Builds the orbital propagated matrix: `T(offset) * R(axis, angle)`.
    ///
    /// The axis is normalized here so recipe tables can state axes like
    /// `(0, 1, 1)` directly.
    #[must_use]
    pub fn orbit(offset: Vec3, angle: f32, axis: Vec3) -> Affine3A {
        Affine3A::from_translation(offset)
            * Affine3A::from_quat(Quat::from_axis_angle(axis.normalize(), angle))
    }

    /// Builds a pure scale local matrix.
    #[must_use]
    pub fn sized(scale: Vec3) -> Affine3A {
        Affine3A::from_scale(scale)
    }

    /// Rebuilds both matrices from an orbital recipe.
    pub fn set_orbit(&mut self, offset: Vec3, angle: f32, axis: Vec3, scale: Vec3) {
        self.propagated = Self::orbit(offset, angle, axis);
        self.local = Self::sized(scale);
    }

    /// Rebuilds both matrices for a prop that only translates, never spins.
    pub fn set_fixed(&mut self, offset: Vec3, scale: Vec3) {
        self.propagated = Affine3A::from_translation(offset);
        self.local = Self::sized(scale);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
