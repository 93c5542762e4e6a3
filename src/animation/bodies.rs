//! Fixed orbit recipes for every non-asteroid body.
//!
//! Each frame a body's transforms are resynthesized from its recipe alone:
//! `propagated = T(offset) * R(axis, phase)`, `local = S(scale)`. Axes are
//! stated unnormalized exactly as authored.

use glam::Vec3;

use crate::animation::phase::PhaseId;

/// One body's authored orbit: radius offset, size, spin axis and which
/// phase scalar supplies the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRecipe {
    pub offset: Vec3,
    pub scale: Vec3,
    pub axis: Vec3,
    pub phase: PhaseId,
}

/// Shared by the nine invisible orbit pivots: they sit at the origin,
/// shrunk so they never show, and only contribute their rotation.
const fn pivot(phase: PhaseId) -> BodyRecipe {
    BodyRecipe {
        offset: Vec3::ZERO,
        scale: Vec3::splat(0.01),
        axis: Vec3::Y,
        phase,
    }
}

pub const MERCURY_PIVOT: BodyRecipe = pivot(PhaseId::Mercury);
pub const VENUS_PIVOT: BodyRecipe = pivot(PhaseId::Venus);
pub const EARTH_PIVOT: BodyRecipe = pivot(PhaseId::Earth);
pub const MARS_PIVOT: BodyRecipe = pivot(PhaseId::Mars);
pub const JUPITER_PIVOT: BodyRecipe = pivot(PhaseId::Jupiter);
pub const SATURN_PIVOT: BodyRecipe = pivot(PhaseId::Saturn);
pub const URANUS_PIVOT: BodyRecipe = pivot(PhaseId::Uranus);
pub const NEPTUNE_PIVOT: BodyRecipe = pivot(PhaseId::Neptune);

pub const MERCURY: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.55, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::new(0.0, 1.0, 1.0),
    phase: PhaseId::Mercury,
};

pub const VENUS: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.75, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::new(0.0, 1.0, 1.0),
    phase: PhaseId::Venus,
};

/// The earth's own spin reads the mercury phase (faster than tEarth, which
/// already drives its pivot) and tumbles about X. Authored coupling.
pub const EARTH: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.85, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::X,
    phase: PhaseId::Mercury,
};

/// The moon hangs above the earth and orbits by the sun phase, not a lunar
/// one. Authored coupling.
pub const MOON: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.0, 0.10, 0.0),
    scale: Vec3::splat(0.04),
    axis: Vec3::Y,
    phase: PhaseId::Sun,
};

pub const MARS: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.95, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::new(0.0, 1.0, 1.0),
    phase: PhaseId::Earth,
};

pub const JUPITER: BodyRecipe = BodyRecipe {
    offset: Vec3::new(1.30, 0.0, 0.0),
    scale: Vec3::splat(0.30),
    axis: Vec3::new(0.2, 1.0, 0.0),
    phase: PhaseId::Earth,
};

pub const SATURN: BodyRecipe = BodyRecipe {
    offset: Vec3::new(1.90, 0.0, 0.0),
    scale: Vec3::splat(0.20),
    axis: Vec3::new(0.0, 1.0, 0.2),
    phase: PhaseId::Earth,
};

/// Same orbit as saturn, squashed flat into a disc.
pub const SATURN_RING: BodyRecipe = BodyRecipe {
    offset: Vec3::new(1.90, 0.0, 0.0),
    scale: Vec3::new(0.35, 0.015, 0.35),
    axis: Vec3::new(0.0, 1.0, 0.2),
    phase: PhaseId::Earth,
};

pub const URANUS: BodyRecipe = BodyRecipe {
    offset: Vec3::new(2.5, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::new(0.0, 1.0, 1.0),
    phase: PhaseId::Earth,
};

pub const NEPTUNE: BodyRecipe = BodyRecipe {
    offset: Vec3::new(2.9, 0.0, 0.0),
    scale: Vec3::splat(0.12),
    axis: Vec3::new(0.0, 1.0, 1.0),
    phase: PhaseId::Earth,
};

/// Giant inside-out sphere enclosing the scene, drifting very slowly.
pub const STARFIELD: BodyRecipe = BodyRecipe {
    offset: Vec3::new(0.0, 0.0, 2.0),
    scale: Vec3::splat(15.0),
    axis: Vec3::ONE,
    phase: PhaseId::Starfield,
};

/// The sun spins about Y by the mercury phase; its scale and material come
/// from the band table, not from here.
pub const SUN_AXIS: Vec3 = Vec3::Y;

/// Asteroid pivot, spiral mode: stays at the origin, the phase angle winds
/// the children inward.
pub const ASTEROID_SPIRAL_SCALE: Vec3 = Vec3::splat(0.1);
pub const ASTEROID_SPIRAL_AXIS: Vec3 = Vec3::Y;

/// Asteroid pivot, parked mode: shoved aside and shrunk to nothing.
pub const ASTEROID_PARKED_OFFSET: Vec3 = Vec3::new(1.42, -1.45, 0.0);
pub const ASTEROID_PARKED_SCALE: Vec3 = Vec3::splat(1e-4);
pub const ASTEROID_PARKED_AXIS: Vec3 = Vec3::new(1.0, 1.0, 0.0);
