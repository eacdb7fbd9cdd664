// Defines the BackwardOp tag stored on every node

use crate::node::{Node, NodeId};

/// The local differentiation rule of a node, tagged by the operation that produced it.
///
/// Every non-leaf node records one variant holding its operand ids and any constant
/// parameter (the `pow` exponent). The backward pass dispatches on the tag; there is
/// no captured state besides what the variant carries.
///
/// `div` and `neg` have no variant of their own: they are recorded as `Mul`/`Pow`
/// sub-graphs and differentiate through those rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Raw input. No parents, the rule is a no-op.
    Leaf,
    /// `a + b`
    Add(NodeId, NodeId),
    /// `a - b`
    Sub(NodeId, NodeId),
    /// `a * b`
    Mul(NodeId, NodeId),
    /// `base ^ exponent` with a constant exponent.
    Pow { base: NodeId, exponent: f64 },
    /// `e ^ a`
    Exp(NodeId),
    /// `max(0, a)`
    Relu(NodeId),
}

impl BackwardOp {
    /// Short operation name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "leaf",
            BackwardOp::Add(..) => "add",
            BackwardOp::Sub(..) => "sub",
            BackwardOp::Mul(..) => "mul",
            BackwardOp::Pow { .. } => "pow",
            BackwardOp::Exp(_) => "exp",
            BackwardOp::Relu(_) => "relu",
        }
    }

    /// Returns the operand ids in the order used by [`BackwardOp::backward`].
    ///
    /// The same id may appear twice (`mul(x, x)`); each occurrence receives its own
    /// gradient contribution.
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add(a, b) | BackwardOp::Sub(a, b) | BackwardOp::Mul(a, b) => vec![a, b],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Exp(a) | BackwardOp::Relu(a) => vec![a],
        }
    }

    /// Computes the gradient contributions to each input given the output's gradient.
    ///
    /// With \( o = f(a, b) \) and \( g = \frac{dL}{do} \), this returns
    /// \( g \cdot \frac{\partial o}{\partial a_i} \) for every entry of [`inputs`](Self::inputs),
    /// evaluated at the forward values already stored in `nodes`. The caller adds
    /// (never assigns) each contribution to the matching input's gradient.
    ///
    /// # Arguments
    /// * `grad_output`: gradient accumulated on the output node.
    /// * `output_value`: forward value of the output node (`exp` reuses it).
    /// * `nodes`: the arena the operand ids index into.
    pub fn backward(&self, grad_output: f64, output_value: f64, nodes: &[Node]) -> Vec<f64> {
        let value_of = |id: NodeId| nodes[id.0].value;
        let g = grad_output;
        match *self {
            BackwardOp::Leaf => vec![],
            BackwardOp::Add(_, _) => vec![g, g],
            BackwardOp::Sub(_, _) => vec![g, -g],
            BackwardOp::Mul(a, b) => vec![g * value_of(b), g * value_of(a)],
            BackwardOp::Pow { base, exponent } => {
                // d/da a^k = k * a^(k-1)
                vec![g * exponent * value_of(base).powf(exponent - 1.0)]
            }
            BackwardOp::Exp(_) => vec![g * output_value],
            BackwardOp::Relu(a) => {
                // The kink at zero gets slope 0.
                let slope = if value_of(a) > 0.0 { 1.0 } else { 0.0 };
                vec![g * slope]
            }
        }
    }
}
