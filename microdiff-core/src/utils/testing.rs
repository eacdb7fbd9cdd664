//! Assertion helpers shared by unit and integration tests.

use crate::graph::Graph;
use crate::node::NodeId;

/// Asserts that the gradient stored on `id` is within `tolerance` of `expected`.
/// Panics if the node does not exist or the gradient differs significantly.
pub fn check_grad_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .grad(id)
        .unwrap_or_else(|e| panic!("Failed to read gradient of {}: {}", id, e));
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Gradient mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

/// Asserts that the forward value of `id` is within `tolerance` of `expected`.
pub fn check_value_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = graph
        .value(id)
        .unwrap_or_else(|e| panic!("Failed to read value of {}: {}", id, e));
    let diff = (actual - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Value mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

/// Asserts that `order` lists every parent strictly before each of its dependents,
/// and that every node appears once.
pub fn check_topological_order(graph: &Graph, order: &[NodeId]) {
    let mut position = vec![None; graph.len()];
    for (pos, id) in order.iter().enumerate() {
        assert!(
            position[id.index()].replace(pos).is_none(),
            "Node {} appears more than once in the order",
            id
        );
    }
    for (pos, id) in order.iter().enumerate() {
        let parents = graph
            .parents(*id)
            .unwrap_or_else(|e| panic!("Failed to read parents of {}: {}", id, e));
        for parent in parents {
            match position[parent.index()] {
                Some(parent_pos) => assert!(
                    parent_pos < pos,
                    "Parent {} of {} appears after it ({} >= {})",
                    parent,
                    id,
                    parent_pos,
                    pos
                ),
                None => panic!("Parent {} of {} is missing from the order", parent, id),
            }
        }
    }
}
