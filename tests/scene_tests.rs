//! Scene graph tests
//!
//! Tests for:
//! - Parent/child wiring and insertion order
//! - Stack-based world composition (propagated inherited, local not)
//! - Draw submission order and visibility
//! - Camera view/projection

use astrofall::assets::AssetServer;
use astrofall::resources::Geometry;
use astrofall::scene::camera::Camera;
use astrofall::scene::node::Node;
use astrofall::scene::{NodeHandle, SceneGraph};
use glam::{Mat4, Vec3};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn test_camera() -> Camera {
    let mut camera = Camera::new_perspective(45.0, 1.0, 0.1, 1000.0);
    camera.look_at_from(Vec3::new(0.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y);
    camera
}

/// A graph with one dummy geometry, plus a constructor for nodes using it.
fn test_graph() -> (SceneGraph, impl FnMut(&mut SceneGraph, Option<NodeHandle>) -> NodeHandle) {
    let mut assets = AssetServer::new();
    let geometry = assets.add_geometry(Geometry::new());
    let scene = SceneGraph::new();
    let add = move |scene: &mut SceneGraph, parent: Option<NodeHandle>| match parent {
        Some(p) => scene.add_to_parent(Node::new(geometry), p),
        None => scene.add_node(Node::new(geometry)),
    };
    (scene, add)
}

// ============================================================================
// Wiring
// ============================================================================

#[test]
fn add_to_parent_wires_both_directions() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    let a = add(&mut scene, Some(root));
    let b = add(&mut scene, Some(root));

    let root_node = scene.get_node(root).unwrap();
    assert_eq!(root_node.children(), &[a, b]);
    assert_eq!(root_node.parent(), None);
    assert_eq!(scene.get_node(a).unwrap().parent(), Some(root));
    assert_eq!(scene.get_node(b).unwrap().parent(), Some(root));
    assert_eq!(scene.len(), 3);
}

// ============================================================================
// Traversal and composition
// ============================================================================

#[test]
fn traversal_is_depth_first_in_insertion_order() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    let a = add(&mut scene, Some(root));
    let a1 = add(&mut scene, Some(a));
    let b = add(&mut scene, Some(root));

    // Tag each node with a distinct X offset so draws are identifiable.
    // Offsets accumulate down the tree, so the expected world X values are
    // unambiguous per traversal order.
    for (handle, x) in [(root, 0.0), (a, 1.0), (a1, 10.0), (b, 100.0)] {
        let node = scene.get_node_mut(handle).unwrap();
        node.transform.set_fixed(Vec3::new(x, 0.0, 0.0), Vec3::ONE);
    }

    let draws = scene.collect_draws(&[root], &test_camera());
    assert_eq!(draws.len(), 4);

    // Depth-first, parent before child, siblings in insertion order:
    // root (0), a (1), a1 (1+10), b (100).
    let xs: Vec<f32> = draws.iter().map(|d| d.model.w_axis.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 11.0, 100.0]);
}

#[test]
fn child_inherits_propagated_but_not_local() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    let child = add(&mut scene, Some(root));

    {
        let node = scene.get_node_mut(root).unwrap();
        node.transform.set_orbit(Vec3::new(1.0, 0.0, 0.0), 0.8, Vec3::Y, Vec3::splat(50.0));
    }
    {
        let node = scene.get_node_mut(child).unwrap();
        node.transform.set_orbit(Vec3::new(0.0, 0.5, 0.0), 0.0, Vec3::Y, Vec3::ONE);
    }

    let camera = test_camera();
    let draws = scene.collect_draws(&[root], &camera);

    let root_prop = scene.get_node(root).unwrap().transform.propagated;
    let child_prop = scene.get_node(child).unwrap().transform.propagated;

    // The child's world pose is parent.propagated * child.propagated; the
    // parent's x50 local scale must not leak in.
    let expected = Mat4::from(root_prop * child_prop);
    assert!(mat4_approx(draws[1].model, expected));
}

#[test]
fn mvp_composes_view_projection_world_and_local() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    {
        let node = scene.get_node_mut(root).unwrap();
        node.transform.set_orbit(Vec3::new(0.55, 0.0, 0.0), 1.1, Vec3::Y, Vec3::splat(0.12));
    }

    let camera = test_camera();
    let draws = scene.collect_draws(&[root], &camera);

    let node = scene.get_node(root).unwrap();
    let expected = camera.view_projection()
        * Mat4::from(node.transform.propagated)
        * Mat4::from(node.transform.local);
    assert!(mat4_approx(draws[0].mvp, expected));
}

#[test]
fn normal_matrix_is_inverse_transpose_of_world() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    {
        let node = scene.get_node_mut(root).unwrap();
        node.transform.set_orbit(Vec3::ZERO, 0.4, Vec3::new(0.0, 1.0, 1.0), Vec3::ONE);
    }

    let draws = scene.collect_draws(&[root], &test_camera());
    let world3 = glam::Mat3::from_mat4(draws[0].model);
    let expected = world3.inverse().transpose();
    assert!(draws[0].normal_matrix.abs_diff_eq(expected, EPSILON));
}

#[test]
fn invisible_node_is_skipped_but_children_still_draw() {
    let (mut scene, mut add) = test_graph();
    let root = add(&mut scene, None);
    let _child = add(&mut scene, Some(root));

    scene.get_node_mut(root).unwrap().visible = false;

    let draws = scene.collect_draws(&[root], &test_camera());
    assert_eq!(draws.len(), 1);
}

#[test]
fn roots_are_drawn_in_given_order() {
    let (mut scene, mut add) = test_graph();
    let a = add(&mut scene, None);
    let b = add(&mut scene, None);

    scene
        .get_node_mut(a)
        .unwrap()
        .transform
        .set_fixed(Vec3::new(7.0, 0.0, 0.0), Vec3::ONE);
    scene
        .get_node_mut(b)
        .unwrap()
        .transform
        .set_fixed(Vec3::new(9.0, 0.0, 0.0), Vec3::ONE);

    let draws = scene.collect_draws(&[b, a], &test_camera());
    let xs: Vec<f32> = draws.iter().map(|d| d.model.w_axis.x).collect();
    assert_eq!(xs, vec![9.0, 7.0]);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_view_projection_is_projection_times_view() {
    let mut camera = Camera::new_perspective(45.0, 1.0, 0.1, 1000.0);
    let eye = Vec3::new(0.0, 2.0, 4.0);
    camera.look_at_from(eye, Vec3::ZERO, Vec3::Y);

    assert_eq!(camera.position(), eye);

    let expected = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 1000.0)
        * Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    assert!(mat4_approx(camera.view_projection(), expected));
}
