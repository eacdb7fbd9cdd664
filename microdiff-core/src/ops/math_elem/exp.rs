// microdiff-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};

/// Records \( o = e^a \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \cdot o \), reusing the forward output
/// since \( \frac{d}{da} e^a = e^a \).
///
/// # Domain Considerations
/// Overflows to `inf` for inputs above roughly 709.78; this is not trapped.
pub fn exp_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
    apply_unary_op(graph, a, f64::exp, BackwardOp::Exp, "exp_op")
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
