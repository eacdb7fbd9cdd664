// microdiff-core/src/ops/arithmetic/div.rs

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::{resolve_operands, Operand};

/// Records \( o = a \cdot b^{-1} \).
///
/// Division has no rule of its own: it is recorded as `mul(a, pow(b, -1))` and
/// differentiates through those two nodes, giving
/// \( \frac{dL}{da} = g / b \) and \( \frac{dL}{db} = -g \cdot a / b^2 \).
///
/// # Domain Considerations
/// Dividing by a zero-valued node yields a non-finite value and non-finite
/// gradients. This is not trapped.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, AutogradError> {
    let (a, b) = resolve_operands(graph, a, b)?;
    let b_inv = pow_op(graph, b, -1)?;
    mul_op(graph, a, b_inv)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
