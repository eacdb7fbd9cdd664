// src/node.rs

use crate::autograd::BackwardOp;
use std::fmt;

/// Stable handle to a node inside a [`Graph`](crate::graph::Graph).
///
/// A `NodeId` is the node's index in the graph arena. Two handles are the same
/// node if and only if their indices are equal, regardless of the values held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage for one vertex of the computation graph.
///
/// Holds the forward value, the gradient accumulator and the tagged backward
/// rule. The rule also carries the operand ids, so the parent set is fixed
/// the moment the node is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Forward-computed scalar (or the raw input for leaves).
    pub(crate) value: f64,
    /// Accumulator for d(root)/d(this); starts at zero.
    pub(crate) grad: f64,
    /// The operation that produced this node, with its operands.
    pub(crate) op: BackwardOp,
}

impl Node {
    pub(crate) fn new(value: f64, op: BackwardOp) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
        }
    }

    pub(crate) fn leaf(value: f64) -> Self {
        Node::new(value, BackwardOp::Leaf)
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the gradient accumulated by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// Returns the operation tag that produced this node.
    pub fn op(&self) -> &BackwardOp {
        &self.op
    }

    /// Returns the distinct operand nodes, in first-use order.
    ///
    /// `mul(x, x)` has a single parent `x`.
    pub fn parents(&self) -> Vec<NodeId> {
        let mut parents = self.op.inputs();
        let mut seen = Vec::with_capacity(parents.len());
        parents.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
        parents
    }

    /// Leaves are raw inputs: no parents and a no-op backward rule.
    pub fn is_leaf(&self) -> bool {
        matches!(self.op, BackwardOp::Leaf)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value = {}; Gradient = {}", self.value, self.grad)
    }
}
