use crate::autograd::graph::topological_sort;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{debug, trace, warn};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Computes d(root)/d(node) for every node reachable from `root`:
    /// 1. topologically sorts the reachable nodes (parents first),
    /// 2. resets their gradients to zero,
    /// 3. seeds `root` with a gradient of `1.0`,
    /// 4. runs every node's backward rule once, in reverse topological order, adding
    ///    each contribution into the operand's gradient.
    ///
    /// Reverse order guarantees that all dependents of a node have already pushed
    /// their contributions when its own rule reads its gradient. Because of step 2,
    /// calling `backward` again on an overlapping graph yields fresh gradients rather
    /// than stale sums. Nodes not reachable from `root` are left untouched.
    ///
    /// Non-finite values are not trapped: a division by zero or an overflowing `exp`
    /// shows up as `inf`/`NaN` gradients, and a warning is logged.
    ///
    /// # Errors
    /// `NodeNotFound` if `root` is not a node of this graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), AutogradError> {
        let sorted = topological_sort(self, root)?;
        debug!(
            "backward: root {} with {} reachable nodes",
            root,
            sorted.len()
        );

        for id in &sorted {
            self.nodes[id.0].grad = 0.0;
        }
        self.nodes[root.0].grad = 1.0;

        for &id in sorted.iter().rev() {
            let node = &self.nodes[id.0];
            if node.is_leaf() {
                continue;
            }
            let op = node.op;
            let input_grads = op.backward(node.grad, node.value, &self.nodes);
            trace!(
                "backward: {} {} grad={} -> {:?}",
                op.name(),
                id,
                node.grad,
                input_grads
            );
            for (input, grad) in op.inputs().into_iter().zip(input_grads) {
                self.nodes[input.0].grad += grad;
            }
        }

        let non_finite = sorted
            .iter()
            .filter(|id| !self.nodes[id.0].grad.is_finite())
            .count();
        if non_finite > 0 {
            warn!(
                "backward: {} of {} gradients from root {} are not finite",
                non_finite,
                sorted.len(),
                root
            );
        }
        debug!("backward: done for root {}", root);
        Ok(())
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&mut self) {
        debug!("zero_grad: clearing {} nodes", self.nodes.len());
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
