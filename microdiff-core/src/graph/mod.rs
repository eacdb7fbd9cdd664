// src/graph/mod.rs

use crate::error::AutogradError;
use crate::node::{Node, NodeId};

mod autograd_methods;
pub mod create;
mod op_methods;

/// Arena owning every node of one computation graph.
///
/// Nodes are appended as leaves are created and operations are applied, and are
/// addressed by their [`NodeId`] index. Operands always exist before the node that
/// uses them, so the parent edges can only point to smaller indices and the graph
/// is acyclic by construction.
///
/// A `Graph` holds plain data only (no shared pointers, no interior mutability),
/// which makes it `Send + Sync`: separate graphs can be built and differentiated
/// on separate threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    /// `NodeNotFound` if `id` does not index this graph.
    pub fn node(&self, id: NodeId) -> Result<&Node, AutogradError> {
        self.nodes.get(id.0).ok_or(AutogradError::NodeNotFound {
            id: id.0,
            len: self.nodes.len(),
        })
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.value)
    }

    /// Gradient currently accumulated on `id`.
    pub fn grad(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.grad)
    }

    /// Distinct operand nodes `id` was computed from.
    pub fn parents(&self, id: NodeId) -> Result<Vec<NodeId>, AutogradError> {
        Ok(self.node(id)?.parents())
    }

    /// Iterates over every node id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Validates that `id` belongs to this graph.
    pub(crate) fn check(&self, id: NodeId) -> Result<NodeId, AutogradError> {
        self.node(id).map(|_| id)
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
