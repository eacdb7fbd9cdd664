//! # Operation Library (`ops`)
//!
//! The primitive differentiable functions. Each one reads its operands' forward
//! values, records a new node in the [`Graph`] and tags it with the
//! [`BackwardOp`] variant the backward pass will dispatch on.
//!
//! ## Structure:
//!
//! - **`_op` functions:** every operation is a free function `xxx_op(graph, ...)`
//!   returning the new [`NodeId`]. `Graph` exposes the same operations as methods.
//! - **Operands:** node operands accept anything `Into<Operand>`: an existing
//!   `NodeId` or a bare number, which is first recorded as a leaf.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`math_elem`]: exp.
//! - [`activation`]: relu.

use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId};

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

/// An operand of a primitive operation: an existing node or a raw number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Scalar(f64::from(value))
                }
            }
        )*
    };
}

impl_scalar_operand!(f64, f32, i32, u32);

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(value as f64)
    }
}

impl Operand {
    /// Checks node operands without touching the graph.
    fn validate(self, graph: &Graph) -> Result<(), AutogradError> {
        match self {
            Operand::Node(id) => graph.check(id).map(|_| ()),
            Operand::Scalar(_) => Ok(()),
        }
    }

    /// Returns the node id, recording scalars as new leaves.
    fn into_node(self, graph: &mut Graph) -> NodeId {
        match self {
            Operand::Node(id) => id,
            Operand::Scalar(value) => graph.leaf(value),
        }
    }
}

/// Resolves one operand to a node id, promoting a scalar to a leaf.
pub(crate) fn resolve_operand(
    graph: &mut Graph,
    a: impl Into<Operand>,
) -> Result<NodeId, AutogradError> {
    let a = a.into();
    a.validate(graph)?;
    Ok(a.into_node(graph))
}

/// Resolves two operands. Both are validated before any scalar is promoted, so a
/// failing call leaves the graph unchanged.
pub(crate) fn resolve_operands(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<(NodeId, NodeId), AutogradError> {
    let (a, b) = (a.into(), b.into());
    a.validate(graph)?;
    b.validate(graph)?;
    Ok((a.into_node(graph), b.into_node(graph)))
}

/// Records a unary operation.
///
/// # Arguments
/// * `forward`: computes the output value from the operand's value.
/// * `backward_builder`: builds the tag from the resolved operand id.
/// * `op_name`: name used in trace output.
pub(crate) fn apply_unary_op<F, B>(
    graph: &mut Graph,
    a: impl Into<Operand>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Result<NodeId, AutogradError>
where
    F: Fn(f64) -> f64,
    B: FnOnce(NodeId) -> BackwardOp,
{
    let a = resolve_operand(graph, a)?;
    let value = forward(graph.nodes()[a.0].value);
    let out = graph.push(Node::new(value, backward_builder(a)));
    log::trace!("{}: {} = {}({}) -> {}", op_name, out, op_name, a, value);
    Ok(out)
}

/// Records a binary operation. See [`apply_unary_op`].
pub(crate) fn apply_binary_op<F, B>(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    forward: F,
    backward_builder: B,
    op_name: &str,
) -> Result<NodeId, AutogradError>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce(NodeId, NodeId) -> BackwardOp,
{
    let (a, b) = resolve_operands(graph, a, b)?;
    let value = forward(graph.nodes()[a.0].value, graph.nodes()[b.0].value);
    let out = graph.push(Node::new(value, backward_builder(a, b)));
    log::trace!("{}: {} = {}({}, {}) -> {}", op_name, out, op_name, a, b, value);
    Ok(out)
}
