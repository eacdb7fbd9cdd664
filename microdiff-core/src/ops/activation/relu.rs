use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};

/// Records the Rectified Linear Unit \( o = \max(0, a) \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \cdot [a > 0] \). At the kink \( a = 0 \)
/// the slope is taken to be 0.
pub fn relu_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
    apply_unary_op(
        graph,
        a,
        |x| if x > 0.0 { x } else { 0.0 },
        BackwardOp::Relu,
        "relu_op",
    )
}
