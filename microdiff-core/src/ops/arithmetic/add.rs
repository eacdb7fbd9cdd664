// microdiff-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_binary_op, Operand};

/// Records \( o = a + b \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \) and \( \frac{dL}{db} \mathrel{+}= g \).
///
/// # Errors
/// `NodeNotFound` if a node operand is not part of `graph`.
pub fn add_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, AutogradError> {
    apply_binary_op(graph, a, b, |x, y| x + y, BackwardOp::Add, "add_op")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
