// microdiff-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_binary_op, Operand};

/// Records \( o = a \cdot b \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \cdot b \) and \( \frac{dL}{db} \mathrel{+}= g \cdot a \),
/// using the forward values. `mul(x, x)` applies both updates to `x`.
pub fn mul_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, AutogradError> {
    apply_binary_op(graph, a, b, |x, y| x * y, BackwardOp::Mul, "mul_op")
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
