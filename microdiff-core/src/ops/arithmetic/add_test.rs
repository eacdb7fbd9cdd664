use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::add_op;

#[test]
fn test_add_forward() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(-4.0);
    let c = add_op(&mut graph, a, b)?;
    assert_eq!(graph.value(c)?, -2.5);
    assert_eq!(*graph.node(c)?.op(), BackwardOp::Add(a, b));
    assert_eq!(graph.parents(c)?, vec![a, b]);
    Ok(())
}

#[test]
fn test_add_identity_gradient_is_exactly_one() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.3);
    let y = add_op(&mut graph, x, 0)?;
    graph.backward(y)?;
    assert_eq!(graph.grad(x)?, 1.0);
    Ok(())
}

#[test]
fn test_add_reflected_scalar() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = add_op(&mut graph, 10.0, x)?;
    assert_eq!(graph.value(y)?, 12.0);
    graph.backward(y)?;
    assert_eq!(graph.grad(x)?, 1.0);
    Ok(())
}

#[test]
fn test_add_same_node_twice() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = add_op(&mut graph, x, x)?;
    assert_eq!(graph.parents(y)?, vec![x]);
    graph.backward(y)?;
    assert_eq!(graph.grad(x)?, 2.0);
    Ok(())
}

#[test]
fn test_add_unknown_node() {
    let mut graph = Graph::new();
    let result = add_op(&mut graph, NodeId(0), 1.0);
    assert!(matches!(result, Err(AutogradError::NodeNotFound { .. })));
}
