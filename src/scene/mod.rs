//! Scene graph module
//!
//! Manages the fixed tree of celestial bodies and props:
//! - Node: one rendered body or prop (hierarchy, transform, material, light)
//! - Transform: the propagated/local dual-matrix transform component
//! - SceneGraph: arena of nodes plus the draw-submission traversal
//! - Camera: fixed perspective view/projection pair
//! - Light: the single global light source, copied by value onto each node

pub mod camera;
pub mod graph;
pub mod light;
pub mod node;
pub mod transform;

pub use camera::Camera;
pub use graph::{DrawCall, SceneGraph};
pub use light::Light;
pub use node::Node;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
