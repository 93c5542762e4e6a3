//! Scene graph arena and draw-submission traversal.
//!
//! The tree lives in a slotmap arena addressed by stable [`NodeHandle`]s; a
//! parent stores the list of its child handles, so there is no lifetime
//! ambiguity between nodes. Traversal is depth-first, parent before child,
//! children in insertion order, carrying an explicit stack of accumulated
//! `propagated` matrices. Only `propagated` is pushed onto the stack —
//! `local` applies to the node's own draw and is never inherited.
//!
//! The traversal is pure collection: it emits [`DrawCall`] records and
//! touches no GPU state, so transform composition is unit-testable without a
//! rendering backend.

use glam::{Affine3A, Mat3, Mat4};
use slotmap::SlotMap;

use crate::assets::{GeometryHandle, TextureHandle};
use crate::resources::Material;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::NodeHandle;

/// Everything the rendering backend needs for one draw.
#[derive(Debug, Clone)]
pub struct DrawCall {
    /// `view_projection * world * local`.
    pub mvp: Mat4,
    /// Accumulated propagated product (the world model matrix, local scale
    /// excluded) — used for lighting-space positions.
    pub model: Mat4,
    /// Inverse-transpose of the model's 3x3 linear part, for normal
    /// transforms that stay correct under non-uniform scale.
    pub normal_matrix: Mat3,
    pub material: Material,
    pub light: Light,
    pub geometry: GeometryHandle,
    pub texture: Option<TextureHandle>,
}

/// Arena-backed scene graph.
#[derive(Default)]
pub struct SceneGraph {
    pub nodes: SlotMap<NodeHandle, Node>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parentless node.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        self.nodes.insert(node)
    }

    /// Inserts a node as the last child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }
        handle
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks the subtrees rooted at `roots` and collects one [`DrawCall`]
    /// per visible node.
    ///
    /// Preconditions: every node's transforms are already rebuilt for the
    /// current frame. The traversal mutates no node state.
    #[must_use]
    pub fn collect_draws(&self, roots: &[NodeHandle], camera: &Camera) -> Vec<DrawCall> {
        let vp = camera.view_projection();
        let mut out = Vec::with_capacity(self.nodes.len());

        // Explicit stack: (node, accumulated parent propagated product).
        let mut stack: Vec<(NodeHandle, Affine3A)> = Vec::with_capacity(16);
        for &root in roots.iter().rev() {
            stack.push((root, Affine3A::IDENTITY));
        }

        while let Some((handle, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };

            let world = parent_world * node.transform.propagated;

            if node.visible {
                let model = Mat4::from(world);
                let mvp = vp * model * Mat4::from(node.transform.local);
                let normal_matrix = Mat3::from_mat4(model).inverse().transpose();

                out.push(DrawCall {
                    mvp,
                    model,
                    normal_matrix,
                    material: node.material,
                    light: node.light,
                    geometry: node.geometry,
                    texture: node.texture,
                });
            }

            // Reverse push keeps children in insertion (draw) order.
            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }

        out
    }
}
