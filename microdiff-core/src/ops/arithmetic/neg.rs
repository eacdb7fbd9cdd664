// microdiff-core/src/ops/arithmetic/neg.rs

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul_op;
use crate::ops::{resolve_operand, Operand};

/// Records \( o = -a \) as `mul(a, -1)`.
pub fn neg_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
    let a = resolve_operand(graph, a)?;
    mul_op(graph, a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
