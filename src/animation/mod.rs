//! Animation module
//!
//! Drives the whole scene from a bank of phase scalars:
//! - PhaseBank: per-body phase accumulators plus the fixed-point asteroid phase
//! - bands: threshold-band tables on the asteroid phase (sun state, asteroid
//!   motion, impact props, draw-set selection)
//! - bodies: fixed orbit recipes (radius, scale, axis, phase) per body
//! - AnimationDriver: the per-frame step that advances phases, resynthesizes
//!   every node transform from scratch and selects what gets drawn

pub mod bands;
pub mod bodies;
pub mod driver;
pub mod phase;

pub use bands::{AsteroidMotion, DrawSet, PropPose, SunEffect};
pub use driver::{AnimationDriver, FramePlan};
pub use phase::{PhaseBank, PhaseId};
