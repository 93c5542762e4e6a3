//! Per-frame animation step.

use glam::Vec3;

use crate::animation::bands::{self, AsteroidMotion, DrawSet};
use crate::animation::bodies;
use crate::animation::phase::PhaseBank;
use crate::scenario::Scenario;
use crate::scene::SceneGraph;

/// What the frame after a phase advance should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePlan {
    /// The asteroid phase ran past its terminal threshold; leave the loop.
    Halt,
    /// Draw the selected subset of the tree.
    Draw(DrawSet),
}

/// Owns the phase bank and turns it into node transforms once per frame.
///
/// A frame is: advance the phases (step chosen by the draw-set and motion
/// bands of the current asteroid phase), then either halt or resynthesize
/// every node's transforms from scratch for the new phase values. Nothing
/// but the phase bank persists between frames, so rebuilding twice without
/// an advance in between is bit-identical.
pub struct AnimationDriver {
    phases: PhaseBank,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phases: PhaseBank::new(),
        }
    }

    /// Starts mid-story from an arbitrary bank. Used by tests and replays.
    #[must_use]
    pub fn from_phases(phases: PhaseBank) -> Self {
        Self { phases }
    }

    #[must_use]
    pub fn phases(&self) -> &PhaseBank {
        &self.phases
    }

    /// Runs one animation frame over the scene.
    pub fn advance(&mut self, scene: &mut SceneGraph, scenario: &Scenario) -> FramePlan {
        let step = bands::phase_step_milli(self.phases.asteroid_milli());
        self.phases = self.phases.advanced(step);

        let Some(set) = bands::draw_set(self.phases.asteroid_milli()) else {
            return FramePlan::Halt;
        };

        self.rebuild_transforms(scene, scenario);
        FramePlan::Draw(set)
    }

    /// Resynthesizes every node's transforms from the current phase bank.
    ///
    /// Public so the rebuild can be exercised (and repeated) without
    /// advancing the phases.
    pub fn rebuild_transforms(&self, scene: &mut SceneGraph, scenario: &Scenario) {
        let phases = &self.phases;
        let milli = phases.asteroid_milli();

        // Sun: scale and material from the growth bands. Inside the
        // authored hole no row fires and the node keeps last frame's state.
        if let Some(effect) = bands::sun_effect(milli)
            && let Some(sun) = scene.get_node_mut(scenario.sun)
        {
            sun.transform.set_orbit(
                Vec3::ZERO,
                phases.mercury,
                bodies::SUN_AXIS,
                Vec3::splat(effect.scale),
            );
            sun.material = effect.material;
        }

        for (handle, recipe) in scenario.orbiting_bodies() {
            if let Some(node) = scene.get_node_mut(handle) {
                node.transform.set_orbit(
                    recipe.offset,
                    phases.value(recipe.phase),
                    recipe.axis,
                    recipe.scale,
                );
            }
        }

        if let Some(pivot) = scene.get_node_mut(scenario.asteroid_pivot) {
            match bands::asteroid_motion(milli) {
                AsteroidMotion::SpiralIn => pivot.transform.set_orbit(
                    Vec3::ZERO,
                    phases.asteroid(),
                    bodies::ASTEROID_SPIRAL_AXIS,
                    bodies::ASTEROID_SPIRAL_SCALE,
                ),
                AsteroidMotion::Parked => pivot.transform.set_orbit(
                    bodies::ASTEROID_PARKED_OFFSET,
                    phases.asteroid(),
                    bodies::ASTEROID_PARKED_AXIS,
                    bodies::ASTEROID_PARKED_SCALE,
                ),
            }
        }

        let pose = bands::prop_pose(milli);
        if let Some(asteroid) = scene.get_node_mut(scenario.asteroid) {
            asteroid
                .transform
                .set_fixed(pose.asteroid_offset, pose.asteroid_scale);
        }
        if let Some(flame) = scene.get_node_mut(scenario.flame) {
            flame.transform.set_fixed(pose.flame_offset, pose.flame_scale);
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
