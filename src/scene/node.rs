use crate::assets::{GeometryHandle, TextureHandle};
use crate::resources::Material;
use crate::scene::light::Light;
use crate::scene::transform::Transform;
use crate::scene::NodeHandle;

/// One entry in the scene graph: a celestial body or visual prop.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships addressed by stable
/// arena handles; insertion order of `children` is draw order.
///
/// # Resources
///
/// `geometry` refers to the shared sphere mesh in the [`AssetServer`]
/// (many nodes, one mesh); `texture` is per-visual. The nine invisible orbit
/// pivots carry no texture — the renderer binds a 1x1 white fallback for
/// them.
///
/// [`AssetServer`]: crate::assets::AssetServer
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Propagated/local transform pair, rebuilt every frame.
    pub transform: Transform,
    /// Blinn-Phong coefficients; only the sun's is ever rescripted.
    pub material: Material,
    /// Global light, copied by value onto every node.
    pub light: Light,

    pub geometry: GeometryHandle,
    pub texture: Option<TextureHandle>,

    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(geometry: GeometryHandle) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            material: Material::BODY,
            light: Light::default(),
            geometry,
            texture: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}
