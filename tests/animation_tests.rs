//! Animation driver and band table tests
//!
//! Tests for:
//! - Exact fixed-point phase stepping and monotonicity
//! - Band boundary semantics (sun growth, motion, props, draw set)
//! - The authored sun-state hole between -14.1 and -14.35
//! - Per-frame transform resynthesis (idempotence, couplings)
//! - Full-story termination

use astrofall::animation::bands::{self, AsteroidMotion, DrawSet};
use astrofall::animation::{AnimationDriver, FramePlan, PhaseBank};
use astrofall::assets::AssetServer;
use astrofall::resources::{Geometry, Material};
use astrofall::scenario::Scenario;
use astrofall::scene::transform::Transform;
use astrofall::scene::{Node, NodeHandle, SceneGraph};
use glam::Vec3;

// ============================================================================
// Helper
// ============================================================================

/// Builds the fourteen-body tree without touching the filesystem: same
/// wiring as the real scenario, no textures.
fn test_scenario(scene: &mut SceneGraph) -> Scenario {
    let mut assets = AssetServer::new();
    let sphere = assets.add_geometry(Geometry::new());
    let node = || Node::new(sphere);

    let sun = scene.add_node(node());

    let mercury_pivot = scene.add_node(node());
    let mercury = scene.add_to_parent(node(), mercury_pivot);
    let venus_pivot = scene.add_node(node());
    let venus = scene.add_to_parent(node(), venus_pivot);
    let earth_pivot = scene.add_node(node());
    let earth = scene.add_to_parent(node(), earth_pivot);
    let moon = scene.add_to_parent(node(), earth);
    let mars_pivot = scene.add_node(node());
    let mars = scene.add_to_parent(node(), mars_pivot);
    let jupiter_pivot = scene.add_node(node());
    let jupiter = scene.add_to_parent(node(), jupiter_pivot);
    let saturn_pivot = scene.add_node(node());
    let saturn = scene.add_to_parent(node(), saturn_pivot);
    let saturn_ring = scene.add_to_parent(node(), saturn_pivot);
    let uranus_pivot = scene.add_node(node());
    let uranus = scene.add_to_parent(node(), uranus_pivot);
    let neptune_pivot = scene.add_node(node());
    let neptune = scene.add_to_parent(node(), neptune_pivot);

    let starfield = scene.add_node(node());

    let asteroid_pivot = scene.add_node(node());
    let asteroid = scene.add_to_parent(node(), asteroid_pivot);
    let flame = scene.add_to_parent(node(), asteroid_pivot);

    Scenario {
        sun,
        mercury_pivot,
        mercury,
        venus_pivot,
        venus,
        earth_pivot,
        earth,
        moon,
        mars_pivot,
        mars,
        jupiter_pivot,
        jupiter,
        saturn_pivot,
        saturn,
        saturn_ring,
        uranus_pivot,
        uranus,
        neptune_pivot,
        neptune,
        starfield,
        asteroid_pivot,
        asteroid,
        flame,
    }
}

fn driver_at(milli: i32) -> AnimationDriver {
    AnimationDriver::from_phases(PhaseBank::with_asteroid_milli(milli))
}

// ============================================================================
// Phase stepping
// ============================================================================

#[test]
fn fourteen_hundred_spiral_steps_land_exactly_on_minus_fourteen() {
    let mut bank = PhaseBank::with_asteroid_milli(0);
    for _ in 0..1400 {
        bank = bank.advanced(bands::SPIRAL_STEP_MILLI);
    }
    // Integer milli-units make the boundary crossing exact, no f32 drift.
    assert_eq!(bank.asteroid_milli(), -14_000);
    assert_eq!(bank.asteroid(), -14.0);
}

#[test]
fn asteroid_phase_is_strictly_decreasing_until_halt() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);
    let mut driver = AnimationDriver::new();

    let mut previous = driver.phases().asteroid_milli();
    for _ in 0..10_000 {
        let plan = driver.advance(&mut scene, &scenario);
        let current = driver.phases().asteroid_milli();
        assert!(current < previous, "phase must strictly decrease");
        let step = previous - current;
        assert!(
            step == bands::SPIRAL_STEP_MILLI || step == bands::PARKED_STEP_MILLI,
            "unexpected step {step}"
        );
        previous = current;
        if plan == FramePlan::Halt {
            return;
        }
    }
    panic!("animation never reached the terminal threshold");
}

#[test]
fn body_phases_advance_by_their_fixed_steps() {
    let bank = PhaseBank::new().advanced(bands::SPIRAL_STEP_MILLI);
    assert_eq!(bank.sun, PhaseBank::SUN_STEP);
    assert_eq!(bank.mercury, PhaseBank::MERCURY_STEP);
    assert_eq!(bank.starfield, PhaseBank::STARFIELD_STEP);
}

#[test]
fn step_follows_motion_rule_only_in_full_band() {
    // Fresh start: not yet inside the spiral window, parked step.
    assert_eq!(bands::phase_step_milli(0), bands::PARKED_STEP_MILLI);
    // Mid-spiral.
    assert_eq!(bands::phase_step_milli(-5), bands::SPIRAL_STEP_MILLI);
    assert_eq!(bands::phase_step_milli(-11_995), bands::SPIRAL_STEP_MILLI);
    // Parked but still drawing the full scene.
    assert_eq!(bands::phase_step_milli(-12_005), bands::PARKED_STEP_MILLI);
    assert_eq!(bands::phase_step_milli(-14_600), bands::PARKED_STEP_MILLI);
    // Fade-out bands run at the flat step.
    assert_eq!(bands::phase_step_milli(-14_605), bands::FADE_STEP_MILLI);
    assert_eq!(bands::phase_step_milli(-15_500), bands::FADE_STEP_MILLI);
}

// ============================================================================
// Band tables
// ============================================================================

#[test]
fn draw_set_is_a_pure_function_of_phase() {
    assert_eq!(bands::draw_set(-15_200), Some(DrawSet::StarfieldOnly));
    assert_eq!(bands::draw_set(-10_000), Some(DrawSet::Full));
    assert_eq!(bands::draw_set(-16_500), None);
    assert_eq!(bands::draw_set(0), Some(DrawSet::Full));
    assert_eq!(bands::draw_set(-15_700), Some(DrawSet::Nothing));
    assert_eq!(bands::draw_set(-14_800), Some(DrawSet::StarfieldAndSun));
}

#[test]
fn draw_set_boundaries_are_left_inclusive() {
    assert_eq!(bands::draw_set(-16_000), Some(DrawSet::Nothing));
    assert_eq!(bands::draw_set(-15_400), Some(DrawSet::StarfieldOnly));
    assert_eq!(bands::draw_set(-15_000), Some(DrawSet::StarfieldAndSun));
    assert_eq!(bands::draw_set(-14_600), Some(DrawSet::Full));
    assert_eq!(bands::draw_set(-16_005), None);
}

#[test]
fn sun_band_at_minus_14_42_scales_to_0_60_exactly() {
    let effect = bands::sun_effect(-14_420).expect("band must fire");
    assert_eq!(effect.scale, 0.60);
}

#[test]
fn sun_band_boundaries_are_upper_inclusive() {
    assert_eq!(bands::sun_effect(-14_350).unwrap().scale, 0.55);
    assert_eq!(bands::sun_effect(-14_400).unwrap().scale, 0.60);
    assert_eq!(bands::sun_effect(-14_500).unwrap().scale, 0.65);
    assert_eq!(bands::sun_effect(-14_550).unwrap().scale, 0.70);
    assert_eq!(bands::sun_effect(-14_600).unwrap().scale, 0.75);
}

#[test]
fn sun_hole_between_14_1_and_14_35_fires_no_rule() {
    assert!(bands::sun_effect(-14_100).is_none());
    assert!(bands::sun_effect(-14_200).is_none());
    assert!(bands::sun_effect(-14_345).is_none());
    // Just above and below the hole.
    assert_eq!(bands::sun_effect(-14_095).unwrap().scale, 0.5);
    assert_eq!(bands::sun_effect(-14_350).unwrap().scale, 0.55);
    // Past the last band nothing fires either.
    assert!(bands::sun_effect(-14_655).is_none());
    assert!(bands::sun_effect(0).is_none());
}

#[test]
fn final_sun_band_darkens_the_material() {
    let effect = bands::sun_effect(-14_620).unwrap();
    assert_eq!(effect.material, Material::DARKENED);
    assert_eq!(bands::sun_effect(-14_420).unwrap().material, Material::SUN);
}

#[test]
fn motion_band_is_strict_on_both_ends() {
    assert_eq!(bands::asteroid_motion(0), AsteroidMotion::Parked);
    assert_eq!(bands::asteroid_motion(-5), AsteroidMotion::SpiralIn);
    assert_eq!(bands::asteroid_motion(-11_995), AsteroidMotion::SpiralIn);
    assert_eq!(bands::asteroid_motion(-12_000), AsteroidMotion::Parked);
}

#[test]
fn prop_bands_move_the_asteroid_toward_the_sun() {
    let far = bands::prop_pose(-2_000);
    assert_eq!(far.asteroid_offset, Vec3::new(1.5, 1.5, 5.0));

    let near = bands::prop_pose(-5_000);
    assert_eq!(near.asteroid_offset, Vec3::new(1.0, 1.0, 2.7));

    let impact = bands::prop_pose(-12_000);
    assert_eq!(impact.asteroid_offset, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(impact.flame_offset, Vec3::new(0.16, 0.0, 2.0));

    let gone = bands::prop_pose(-14_100);
    assert_eq!(gone.asteroid_offset, Vec3::new(0.0, 0.0, 150.0));
    assert_eq!(gone.flame_offset, Vec3::new(0.0, 0.0, 150.0));
}

// ============================================================================
// Transform resynthesis
// ============================================================================

fn all_transforms(scene: &SceneGraph, scenario: &Scenario) -> Vec<(NodeHandle, Transform)> {
    let mut handles = vec![scenario.sun, scenario.starfield, scenario.asteroid_pivot];
    handles.push(scenario.asteroid);
    handles.push(scenario.flame);
    for (handle, _) in scenario.orbiting_bodies() {
        handles.push(handle);
    }
    handles
        .into_iter()
        .map(|h| (h, scene.get_node(h).unwrap().transform))
        .collect()
}

#[test]
fn rebuild_is_idempotent_without_a_phase_advance() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);
    let driver = driver_at(-7_000);

    driver.rebuild_transforms(&mut scene, &scenario);
    let first = all_transforms(&scene, &scenario);

    driver.rebuild_transforms(&mut scene, &scenario);
    let second = all_transforms(&scene, &scenario);

    // Bit-identical, not approximately equal.
    assert_eq!(first, second);
}

#[test]
fn moon_orbits_by_the_sun_phase() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    let mut bank = PhaseBank::with_asteroid_milli(-1_000);
    for _ in 0..100 {
        bank = bank.advanced(0);
    }
    let driver = AnimationDriver::from_phases(bank);
    driver.rebuild_transforms(&mut scene, &scenario);

    let moon = scene.get_node(scenario.moon).unwrap();
    let expected = Transform::orbit(Vec3::new(0.0, 0.10, 0.0), bank.sun, Vec3::Y);
    assert_eq!(moon.transform.propagated, expected);
}

#[test]
fn earth_spins_by_the_mercury_phase_about_x() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    let mut bank = PhaseBank::with_asteroid_milli(-1_000);
    for _ in 0..50 {
        bank = bank.advanced(0);
    }
    let driver = AnimationDriver::from_phases(bank);
    driver.rebuild_transforms(&mut scene, &scenario);

    let earth = scene.get_node(scenario.earth).unwrap();
    let expected = Transform::orbit(Vec3::new(0.85, 0.0, 0.0), bank.mercury, Vec3::X);
    assert_eq!(earth.transform.propagated, expected);
}

#[test]
fn sun_keeps_prior_state_inside_the_hole() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    // A frame just before the hole writes scale 0.5.
    driver_at(-14_095).rebuild_transforms(&mut scene, &scenario);
    let before = scene.get_node(scenario.sun).unwrap().transform;

    // Frames inside the hole leave the sun untouched.
    driver_at(-14_200).rebuild_transforms(&mut scene, &scenario);
    let inside = scene.get_node(scenario.sun).unwrap().transform;
    assert_eq!(before, inside);

    // The first band below the hole takes over again.
    driver_at(-14_350).rebuild_transforms(&mut scene, &scenario);
    let after = scene.get_node(scenario.sun).unwrap().transform;
    assert_ne!(before, after);
}

#[test]
fn sun_material_darkens_in_the_last_band() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    driver_at(-14_620).rebuild_transforms(&mut scene, &scenario);
    let sun = scene.get_node(scenario.sun).unwrap();
    assert_eq!(sun.material, Material::DARKENED);
}

#[test]
fn parked_asteroid_pivot_sits_off_scene() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    driver_at(-13_000).rebuild_transforms(&mut scene, &scenario);
    let pivot = scene.get_node(scenario.asteroid_pivot).unwrap();
    let origin = pivot.transform.propagated.transform_point3(Vec3::ZERO);
    assert_eq!(origin, Vec3::new(1.42, -1.45, 0.0));
}

// ============================================================================
// Full story
// ============================================================================

#[test]
fn story_runs_to_completion_through_every_draw_set() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);
    let mut driver = AnimationDriver::new();

    let mut seen_full = false;
    let mut seen_sun = false;
    let mut seen_starfield = false;
    let mut seen_nothing = false;
    let mut frames = 0u32;

    loop {
        frames += 1;
        assert!(frames < 10_000, "story must terminate");
        match driver.advance(&mut scene, &scenario) {
            FramePlan::Halt => break,
            FramePlan::Draw(DrawSet::Full) => seen_full = true,
            FramePlan::Draw(DrawSet::StarfieldAndSun) => seen_sun = true,
            FramePlan::Draw(DrawSet::StarfieldOnly) => seen_starfield = true,
            FramePlan::Draw(DrawSet::Nothing) => seen_nothing = true,
        }
    }

    assert!(seen_full && seen_sun && seen_starfield && seen_nothing);
    assert!(driver.phases().asteroid_milli() < -16_000);
}

#[test]
fn roots_match_the_selected_draw_set() {
    let mut scene = SceneGraph::new();
    let scenario = test_scenario(&mut scene);

    assert!(scenario.roots_for(DrawSet::Nothing).is_empty());
    assert_eq!(scenario.roots_for(DrawSet::StarfieldOnly), vec![scenario.starfield]);
    assert_eq!(
        scenario.roots_for(DrawSet::StarfieldAndSun),
        vec![scenario.starfield, scenario.sun]
    );

    let full = scenario.roots_for(DrawSet::Full);
    assert_eq!(full.len(), 11);
    assert_eq!(full[0], scenario.sun);
    assert_eq!(full[9], scenario.starfield);
    assert_eq!(full[10], scenario.asteroid_pivot);
}
