use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Builds a topological sort of the nodes reachable from `root`.
///
/// Every node appears after all of its parents, so the root comes last. The
/// traversal is a post-order depth-first search driven by an explicit work
/// stack: memory grows with the graph, never the call stack, so arbitrarily
/// long expression chains are safe.
///
/// Each reachable node is emitted exactly once no matter how many dependents
/// share it. Runs in O(V + E).
///
/// # Errors
/// `NodeNotFound` if `root` is not a node of `graph`.
pub fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, AutogradError> {
    graph.node(root)?;
    let nodes = graph.nodes();

    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node, parents_pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, parents_pushed)) = stack.pop() {
        if parents_pushed {
            sorted.push(id);
            continue;
        }
        if visited[id.0] {
            continue;
        }
        visited[id.0] = true;
        stack.push((id, true));
        // Reversed so the first operand is explored first.
        for parent in nodes[id.0].parents().into_iter().rev() {
            if !visited[parent.0] {
                stack.push((parent, false));
            }
        }
    }

    log::trace!(
        "topological_sort: {} reachable nodes from root {}",
        sorted.len(),
        root
    );
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[NodeId], id: NodeId) -> usize {
        order.iter().position(|&n| n == id).expect("node missing from order")
    }

    #[test]
    fn test_single_leaf() {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        assert_eq!(topological_sort(&graph, x).unwrap(), vec![x]);
    }

    #[test]
    fn test_diamond_visits_shared_node_once() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.mul(a, 2.0).unwrap();
        let c = graph.add(a, 3.0).unwrap();
        let d = graph.add(b, c).unwrap();

        let order = topological_sort(&graph, d).unwrap();
        // a, 2.0, b, 3.0, c, d
        assert_eq!(order.len(), 6);
        assert_eq!(*order.last().unwrap(), d);
        assert_eq!(order.iter().filter(|&&n| n == a).count(), 1);
        assert!(position(&order, a) < position(&order, b));
        assert!(position(&order, a) < position(&order, c));
        assert!(position(&order, b) < position(&order, d));
        assert!(position(&order, c) < position(&order, d));
    }

    #[test]
    fn test_unreachable_nodes_are_skipped() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let unrelated = graph.leaf(5.0);
        let _other = graph.exp(unrelated).unwrap();
        let y = graph.relu(a).unwrap();

        let order = topological_sort(&graph, y).unwrap();
        assert_eq!(order, vec![a, y]);
    }

    #[test]
    fn test_unknown_root() {
        let graph = Graph::new();
        let result = topological_sort(&graph, NodeId(4));
        assert_eq!(result, Err(AutogradError::NodeNotFound { id: 4, len: 0 }));
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut graph = Graph::with_capacity(200_002);
        let mut acc = graph.leaf(0.0);
        for _ in 0..100_000 {
            acc = graph.add(acc, 1.0).unwrap();
        }
        let order = topological_sort(&graph, acc).unwrap();
        assert_eq!(order.len(), graph.len());
        assert_eq!(*order.last().unwrap(), acc);
    }
}
