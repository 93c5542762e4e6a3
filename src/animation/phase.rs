//! Phase accumulators driving every orbit and the asteroid's story arc.

/// Selects which phase scalar a body's rotation angle reads.
///
/// The mapping is not one-to-one: the earth spins by the mercury phase, the
/// moon orbits by the sun phase, and the outer planets all orbit by the
/// earth phase. These couplings are part of the authored animation and must
/// not be "fixed" to each body's own scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Starfield,
}

/// All phase state of the animation.
///
/// The ten body phases are plain `f32` accumulators, each advanced by its
/// own fixed step every frame and never clamped. The asteroid phase is the
/// band selector and must cross authored thresholds exactly, so it is kept
/// as an `i32` count of milli-units (`t = milli / 1000`); every authored
/// threshold and step is a whole number of milli-units, which makes band
/// membership exact where repeated `f32` accumulation would drift.
///
/// `advanced` returns a new bank instead of mutating, so a frame is a pure
/// function of the previous bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBank {
    pub sun: f32,
    pub mercury: f32,
    pub venus: f32,
    pub earth: f32,
    pub mars: f32,
    pub jupiter: f32,
    pub saturn: f32,
    pub uranus: f32,
    pub neptune: f32,
    pub starfield: f32,
    asteroid_milli: i32,
}

impl PhaseBank {
    pub const SUN_STEP: f32 = 0.007;
    pub const MERCURY_STEP: f32 = 0.01;
    pub const VENUS_STEP: f32 = 0.009;
    pub const EARTH_STEP: f32 = 0.0077;
    pub const MARS_STEP: f32 = 0.0064;
    pub const JUPITER_STEP: f32 = 0.004;
    pub const SATURN_STEP: f32 = 0.003;
    pub const URANUS_STEP: f32 = 0.002;
    pub const NEPTUNE_STEP: f32 = 0.001;
    pub const STARFIELD_STEP: f32 = 0.0002;

    #[must_use]
    pub fn new() -> Self {
        Self {
            sun: 0.0,
            mercury: 0.0,
            venus: 0.0,
            earth: 0.0,
            mars: 0.0,
            jupiter: 0.0,
            saturn: 0.0,
            uranus: 0.0,
            neptune: 0.0,
            starfield: 0.0,
            asteroid_milli: 0,
        }
    }

    /// One frame's worth of phase advance. `asteroid_step_milli` is chosen
    /// by the band tables for the current asteroid phase; everything else
    /// moves by its fixed step.
    #[must_use]
    pub fn advanced(&self, asteroid_step_milli: i32) -> Self {
        Self {
            sun: self.sun + Self::SUN_STEP,
            mercury: self.mercury + Self::MERCURY_STEP,
            venus: self.venus + Self::VENUS_STEP,
            earth: self.earth + Self::EARTH_STEP,
            mars: self.mars + Self::MARS_STEP,
            jupiter: self.jupiter + Self::JUPITER_STEP,
            saturn: self.saturn + Self::SATURN_STEP,
            uranus: self.uranus + Self::URANUS_STEP,
            neptune: self.neptune + Self::NEPTUNE_STEP,
            starfield: self.starfield + Self::STARFIELD_STEP,
            asteroid_milli: self.asteroid_milli - asteroid_step_milli,
        }
    }

    /// Asteroid phase in milli-units, the exact form band predicates use.
    #[inline]
    #[must_use]
    pub fn asteroid_milli(&self) -> i32 {
        self.asteroid_milli
    }

    /// Asteroid phase as the angle (radians) fed to the spiral rotation.
    #[inline]
    #[must_use]
    pub fn asteroid(&self) -> f32 {
        self.asteroid_milli as f32 * 1e-3
    }

    #[must_use]
    pub fn value(&self, id: PhaseId) -> f32 {
        match id {
            PhaseId::Sun => self.sun,
            PhaseId::Mercury => self.mercury,
            PhaseId::Venus => self.venus,
            PhaseId::Earth => self.earth,
            PhaseId::Mars => self.mars,
            PhaseId::Jupiter => self.jupiter,
            PhaseId::Saturn => self.saturn,
            PhaseId::Uranus => self.uranus,
            PhaseId::Neptune => self.neptune,
            PhaseId::Starfield => self.starfield,
        }
    }

    /// Test/replay constructor: a bank with only the asteroid phase set.
    #[must_use]
    pub fn with_asteroid_milli(milli: i32) -> Self {
        Self {
            asteroid_milli: milli,
            ..Self::new()
        }
    }
}

impl Default for PhaseBank {
    fn default() -> Self {
        Self::new()
    }
}
