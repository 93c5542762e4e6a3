//! Threshold bands on the asteroid phase.
//!
//! Four independent concerns are banded on the same decreasing scalar, each
//! with its own boundaries: the sun's impact growth, the asteroid pivot's
//! motion mode, the asteroid/flame prop poses, and which subset of the tree
//! is drawn. A frame can be inside a different band of each table at once,
//! so the tables are kept separate rather than unified into one switch.
//!
//! Each table is an ordered list of `(predicate, effect)` rows evaluated
//! first match wins. Predicates take the phase in milli-units so boundary
//! crossings are exact integer comparisons.

use glam::Vec3;

use crate::resources::Material;

type Predicate = fn(i32) -> bool;

fn first_match<T>(table: &'static [(Predicate, T)], milli: i32) -> Option<&'static T> {
    table.iter().find(|(hit, _)| hit(milli)).map(|(_, effect)| effect)
}

// ---------------------------------------------------------------------------
// Sun scale / impact state
// ---------------------------------------------------------------------------

/// Scale and material the sun takes on inside one growth band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEffect {
    pub scale: f32,
    pub material: Material,
}

/// There is an authored hole between -14.1 and -14.35 where no row fires
/// and the sun keeps whatever transform and material the previous frame
/// left on it. The hole is intentional content of the animation; do not
/// close it.
const SUN_BANDS: [(Predicate, SunEffect); 6] = [
    (
        |m| m < 0 && m > -14_100,
        SunEffect { scale: 0.5, material: Material::SUN },
    ),
    (
        |m| m <= -14_350 && m > -14_400,
        SunEffect { scale: 0.55, material: Material::SUN },
    ),
    (
        |m| m <= -14_400 && m > -14_500,
        SunEffect { scale: 0.60, material: Material::SUN },
    ),
    (
        |m| m <= -14_500 && m > -14_550,
        SunEffect { scale: 0.65, material: Material::SUN },
    ),
    (
        |m| m <= -14_550 && m > -14_600,
        SunEffect { scale: 0.70, material: Material::SUN },
    ),
    (
        |m| m <= -14_600 && m > -14_650,
        SunEffect { scale: 0.75, material: Material::DARKENED },
    ),
];

/// Looks up the sun's state for this frame; `None` means no band fires and
/// the sun is left untouched (rotation, scale and material all keep their
/// prior-frame values).
#[must_use]
pub fn sun_effect(milli: i32) -> Option<&'static SunEffect> {
    first_match(&SUN_BANDS, milli)
}

// ---------------------------------------------------------------------------
// Asteroid pivot motion
// ---------------------------------------------------------------------------

/// Motion mode of the invisible pivot carrying the asteroid and flame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidMotion {
    /// Orbiting about the Y axis with the asteroid phase itself as the
    /// angle; the pivot stays at the origin and the decreasing phase winds
    /// the group inward.
    SpiralIn,
    /// Parked off to the side at a fixed offset, shrunk to nothing.
    Parked,
}

const MOTION_BANDS: [(Predicate, AsteroidMotion); 2] = [
    (|m| m < 0 && m > -12_000, AsteroidMotion::SpiralIn),
    (|_| true, AsteroidMotion::Parked),
];

#[must_use]
pub fn asteroid_motion(milli: i32) -> AsteroidMotion {
    *first_match(&MOTION_BANDS, milli).unwrap_or(&AsteroidMotion::Parked)
}

// ---------------------------------------------------------------------------
// Asteroid + flame props
// ---------------------------------------------------------------------------

/// Poses of the two props under the asteroid pivot. Offsets are pure
/// translations in the pivot's frame; scales go into the local matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPose {
    pub asteroid_offset: Vec3,
    pub asteroid_scale: Vec3,
    pub flame_offset: Vec3,
    pub flame_scale: Vec3,
}

const FLAME_IDLE_SCALE: Vec3 = Vec3::new(0.3, 0.28, 0.3);
const FAR_AWAY: Vec3 = Vec3::new(0.0, 0.0, 150.0);

const PROP_BANDS: [(Predicate, PropPose); 4] = [
    // Distant approach; flame parked behind the far plane.
    (
        |m| m < 0 && m > -5_000,
        PropPose {
            asteroid_offset: Vec3::new(1.5, 1.5, 5.0),
            asteroid_scale: Vec3::splat(0.3),
            flame_offset: FAR_AWAY,
            flame_scale: FLAME_IDLE_SCALE,
        },
    ),
    // Closing in on the sun, flame still inactive.
    (
        |m| m <= -5_000 && m > -12_000,
        PropPose {
            asteroid_offset: Vec3::new(1.0, 1.0, 2.7),
            asteroid_scale: Vec3::splat(0.3),
            flame_offset: FAR_AWAY,
            flame_scale: FLAME_IDLE_SCALE,
        },
    ),
    // Impact: asteroid sits on the sun, flame flares beside it.
    (
        |m| m <= -12_000 && m > -14_100,
        PropPose {
            asteroid_offset: Vec3::new(0.0, 0.0, 2.0),
            asteroid_scale: Vec3::splat(0.3),
            flame_offset: Vec3::new(0.16, 0.0, 2.0),
            flame_scale: Vec3::new(0.6, 0.3, 0.3),
        },
    ),
    // Both gone.
    (
        |_| true,
        PropPose {
            asteroid_offset: FAR_AWAY,
            asteroid_scale: Vec3::splat(0.3),
            flame_offset: FAR_AWAY,
            flame_scale: FLAME_IDLE_SCALE,
        },
    ),
];

#[must_use]
pub fn prop_pose(milli: i32) -> &'static PropPose {
    first_match(&PROP_BANDS, milli).unwrap_or(&PROP_BANDS[3].1)
}

// ---------------------------------------------------------------------------
// Draw-set selection and phase stepping
// ---------------------------------------------------------------------------

/// Which top-level nodes are submitted this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSet {
    /// Post-impact blackout: nothing is drawn while the phase runs out.
    Nothing,
    StarfieldOnly,
    StarfieldAndSun,
    /// All planets, the starfield and the asteroid group.
    Full,
}

/// `None` terminates the animation loop.
const DRAW_BANDS: [(Predicate, Option<DrawSet>); 5] = [
    (|m| m < -16_000, None),
    (|m| m < -15_400, Some(DrawSet::Nothing)),
    (|m| m < -15_000, Some(DrawSet::StarfieldOnly)),
    (|m| m < -14_600, Some(DrawSet::StarfieldAndSun)),
    (|_| true, Some(DrawSet::Full)),
];

#[must_use]
pub fn draw_set(milli: i32) -> Option<DrawSet> {
    first_match(&DRAW_BANDS, milli).copied().flatten()
}

/// Step applied to the asteroid phase each frame.
pub const SPIRAL_STEP_MILLI: i32 = 10;
pub const PARKED_STEP_MILLI: i32 = 5;
pub const FADE_STEP_MILLI: i32 = 10;

/// Chooses the per-frame asteroid step: the full-scene band defers to the
/// motion rule (fast while spiralling, slow while parked), every later band
/// runs the phase out at the flat fade step.
#[must_use]
pub fn phase_step_milli(milli: i32) -> i32 {
    match draw_set(milli) {
        Some(DrawSet::Full) => match asteroid_motion(milli) {
            AsteroidMotion::SpiralIn => SPIRAL_STEP_MILLI,
            AsteroidMotion::Parked => PARKED_STEP_MILLI,
        },
        _ => FADE_STEP_MILLI,
    }
}
