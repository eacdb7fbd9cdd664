// microdiff-core/src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_binary_op, Operand};

/// Records \( o = a - b \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \) and \( \frac{dL}{db} \mathrel{-}= g \).
pub fn sub_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, AutogradError> {
    apply_binary_op(graph, a, b, |x, y| x - y, BackwardOp::Sub, "sub_op")
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
