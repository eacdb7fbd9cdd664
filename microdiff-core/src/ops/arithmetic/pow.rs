// microdiff-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::{apply_unary_op, Operand};
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Records \( o = a^k \) for a constant exponent \( k \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= g \cdot k \cdot a^{k-1} \).
///
/// The exponent must be a plain number (integer or float). Nodes do not implement
/// `ToPrimitive`, so a node exponent is rejected when the call is compiled; there is
/// no gradient with respect to the exponent.
///
/// # Domain Considerations
/// Non-finite results (`0^-1`, negative base with fractional exponent, overflow) are
/// not trapped; they propagate as `inf`/`NaN`.
///
/// # Errors
/// * `MalformedExponent` if `exponent` has no `f64` representation.
/// * `NodeNotFound` if `base` is not part of `graph`.
pub fn pow_op<E: ToPrimitive + Debug>(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: E,
) -> Result<NodeId, AutogradError> {
    let k = exponent
        .to_f64()
        .ok_or_else(|| AutogradError::MalformedExponent(format!("{:?}", exponent)))?;
    apply_unary_op(
        graph,
        base,
        |x| x.powf(k),
        |base| BackwardOp::Pow { base, exponent: k },
        "pow_op",
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
