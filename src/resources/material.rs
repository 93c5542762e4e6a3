use glam::Vec3;

/// Blinn-Phong material coefficients submitted with every draw.
///
/// Authored once per node at scene assembly. The only scripted mutation is
/// the sun darkening to [`Material::DARKENED`] when the impact band of the
/// asteroid phase is entered; that value is produced by the band table as a
/// pure function of the phase, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color multiplied with the texture sample.
    pub color: Vec3,
    /// Ambient coefficient.
    pub ka: f32,
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular coefficient.
    pub ks: f32,
    /// Shininess exponent.
    pub shininess: f32,
}

impl Material {
    /// Default material for planets, moons and props.
    pub const BODY: Self = Self {
        color: Vec3::ONE,
        ka: 0.4,
        kd: 0.9,
        ks: 0.8,
        shininess: 100.0,
    };

    /// Mostly-ambient material for the self-lit sun and the starfield.
    pub const SUN: Self = Self {
        color: Vec3::ONE,
        ka: 1.0,
        kd: 0.5,
        ks: 0.5,
        shininess: 10.0,
    };

    /// Near-black, low-reflectance material the sun takes on in the final
    /// band of the impact sequence.
    pub const DARKENED: Self = Self {
        color: Vec3::new(0.2, 0.2, 0.2),
        ka: 0.1,
        kd: 0.0,
        ks: 0.0,
        shininess: 5.0,
    };
}

impl Default for Material {
    fn default() -> Self {
        Self::BODY
    }
}
