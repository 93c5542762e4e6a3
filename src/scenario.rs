//! Fixed fourteen-body scene assembly.
//!
//! Builds the whole tree once at startup: the sun, eight invisible orbit
//! pivots each carrying one planet (saturn's also carrying its ring, the
//! earth's carrying the moon), the starfield shell, and the asteroid pivot
//! carrying the asteroid and its flame. Wiring never changes afterwards;
//! only transforms and the sun's material mutate, once per frame.

use std::path::Path;

use crate::animation::bodies::{self, BodyRecipe};
use crate::assets::AssetServer;
use crate::errors::Result;
use crate::resources::primitives::{create_sphere, SphereOptions};
use crate::resources::Material;
use crate::scene::{Node, NodeHandle, SceneGraph};

use crate::animation::DrawSet;

const TEXTURE_DIR: &str = "assets/textures";

/// Handles into the assembled scene, paired with each body's orbit recipe
/// by [`Scenario::orbiting_bodies`].
pub struct Scenario {
    pub sun: NodeHandle,

    pub mercury_pivot: NodeHandle,
    pub mercury: NodeHandle,
    pub venus_pivot: NodeHandle,
    pub venus: NodeHandle,
    pub earth_pivot: NodeHandle,
    pub earth: NodeHandle,
    pub moon: NodeHandle,
    pub mars_pivot: NodeHandle,
    pub mars: NodeHandle,
    pub jupiter_pivot: NodeHandle,
    pub jupiter: NodeHandle,
    pub saturn_pivot: NodeHandle,
    pub saturn: NodeHandle,
    pub saturn_ring: NodeHandle,
    pub uranus_pivot: NodeHandle,
    pub uranus: NodeHandle,
    pub neptune_pivot: NodeHandle,
    pub neptune: NodeHandle,

    pub starfield: NodeHandle,

    pub asteroid_pivot: NodeHandle,
    pub asteroid: NodeHandle,
    pub flame: NodeHandle,
}

impl Scenario {
    /// Loads the fourteen textures, generates the shared sphere and wires
    /// the tree. A missing or undecodable image file is fatal.
    pub fn build(scene: &mut SceneGraph, assets: &mut AssetServer) -> Result<Self> {
        let sphere = assets.add_geometry(create_sphere(SphereOptions::default()));

        let dir = Path::new(TEXTURE_DIR);
        let tex_sun = assets.load_texture_from_file(dir.join("2k_sun.png"))?;
        let tex_earth = assets.load_texture_from_file(dir.join("2k_earth_daymap.png"))?;
        let tex_moon = assets.load_texture_from_file(dir.join("2k_moon.png"))?;
        let tex_mercury = assets.load_texture_from_file(dir.join("2k_mercury.png"))?;
        let tex_venus = assets.load_texture_from_file(dir.join("2k_venus_surface.png"))?;
        let tex_mars = assets.load_texture_from_file(dir.join("2k_mars.png"))?;
        let tex_jupiter = assets.load_texture_from_file(dir.join("2k_jupiter.png"))?;
        let tex_saturn = assets.load_texture_from_file(dir.join("2k_saturn.png"))?;
        let tex_saturn_ring =
            assets.load_texture_from_file(dir.join("2k_saturn_ring_alpha_3.png"))?;
        let tex_uranus = assets.load_texture_from_file(dir.join("2k_uranus.png"))?;
        let tex_neptune = assets.load_texture_from_file(dir.join("2k_neptune.png"))?;
        let tex_stars = assets.load_texture_from_file(dir.join("2k_stars_2.png"))?;
        // The asteroid and flame reuse the moon and sun imagery.
        let tex_asteroid = assets.load_texture_from_file(dir.join("2k_moon.png"))?;
        let tex_flame = assets.load_texture_from_file(dir.join("2k_sun.png"))?;

        let sun = scene.add_node(
            Node::new(sphere)
                .with_texture(tex_sun)
                .with_material(Material::SUN),
        );

        let mercury_pivot = scene.add_node(Node::new(sphere));
        let mercury =
            scene.add_to_parent(Node::new(sphere).with_texture(tex_mercury), mercury_pivot);

        let venus_pivot = scene.add_node(Node::new(sphere));
        let venus = scene.add_to_parent(Node::new(sphere).with_texture(tex_venus), venus_pivot);

        let earth_pivot = scene.add_node(Node::new(sphere));
        let earth = scene.add_to_parent(Node::new(sphere).with_texture(tex_earth), earth_pivot);
        let moon = scene.add_to_parent(Node::new(sphere).with_texture(tex_moon), earth);

        let mars_pivot = scene.add_node(Node::new(sphere));
        let mars = scene.add_to_parent(Node::new(sphere).with_texture(tex_mars), mars_pivot);

        let jupiter_pivot = scene.add_node(Node::new(sphere));
        let jupiter =
            scene.add_to_parent(Node::new(sphere).with_texture(tex_jupiter), jupiter_pivot);

        let saturn_pivot = scene.add_node(Node::new(sphere));
        let saturn = scene.add_to_parent(Node::new(sphere).with_texture(tex_saturn), saturn_pivot);
        let saturn_ring =
            scene.add_to_parent(Node::new(sphere).with_texture(tex_saturn_ring), saturn_pivot);

        let uranus_pivot = scene.add_node(Node::new(sphere));
        let uranus = scene.add_to_parent(Node::new(sphere).with_texture(tex_uranus), uranus_pivot);

        let neptune_pivot = scene.add_node(Node::new(sphere));
        let neptune =
            scene.add_to_parent(Node::new(sphere).with_texture(tex_neptune), neptune_pivot);

        let starfield = scene.add_node(
            Node::new(sphere)
                .with_texture(tex_stars)
                .with_material(Material::SUN),
        );

        let asteroid_pivot = scene.add_node(Node::new(sphere));
        let asteroid =
            scene.add_to_parent(Node::new(sphere).with_texture(tex_asteroid), asteroid_pivot);
        let flame = scene.add_to_parent(Node::new(sphere).with_texture(tex_flame), asteroid_pivot);

        log::info!("Scenario assembled: {} nodes", scene.len());

        Ok(Self {
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
        })
    }

    /// Every body whose transforms come from a plain orbit recipe — all of
    /// the tree except the band-driven sun, asteroid pivot and props.
    #[must_use]
    pub fn orbiting_bodies(&self) -> [(NodeHandle, &'static BodyRecipe); 19] {
        [
            (self.mercury_pivot, &bodies::MERCURY_PIVOT),
            (self.mercury, &bodies::MERCURY),
            (self.venus_pivot, &bodies::VENUS_PIVOT),
            (self.venus, &bodies::VENUS),
            (self.earth_pivot, &bodies::EARTH_PIVOT),
            (self.earth, &bodies::EARTH),
            (self.moon, &bodies::MOON),
            (self.mars_pivot, &bodies::MARS_PIVOT),
            (self.mars, &bodies::MARS),
            (self.jupiter_pivot, &bodies::JUPITER_PIVOT),
            (self.jupiter, &bodies::JUPITER),
            (self.saturn_pivot, &bodies::SATURN_PIVOT),
            (self.saturn, &bodies::SATURN),
            (self.saturn_ring, &bodies::SATURN_RING),
            (self.uranus_pivot, &bodies::URANUS_PIVOT),
            (self.uranus, &bodies::URANUS),
            (self.neptune_pivot, &bodies::NEPTUNE_PIVOT),
            (self.neptune, &bodies::NEPTUNE),
            (self.starfield, &bodies::STARFIELD),
        ]
    }

    /// Top-level nodes submitted for a draw set, in draw order.
    #[must_use]
    pub fn roots_for(&self, set: DrawSet) -> Vec<NodeHandle> {
        match set {
            DrawSet::Nothing => Vec::new(),
            DrawSet::StarfieldOnly => vec![self.starfield],
            DrawSet::StarfieldAndSun => vec![self.starfield, self.sun],
            DrawSet::Full => vec![
                self.sun,
                self.earth_pivot,
                self.mercury_pivot,
                self.venus_pivot,
                self.mars_pivot,
                self.jupiter_pivot,
                self.saturn_pivot,
                self.uranus_pivot,
                self.neptune_pivot,
                self.starfield,
                self.asteroid_pivot,
            ],
        }
    }
}
