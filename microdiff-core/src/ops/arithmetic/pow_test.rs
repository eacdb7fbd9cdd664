use crate::autograd::BackwardOp;
use crate::error::AutogradError;
use crate::graph::Graph;
use crate::ops::arithmetic::pow_op;
use approx::assert_relative_eq;
use num_traits::ToPrimitive;

/// A number type with no f64 representation.
#[derive(Debug)]
struct Opaque;

impl ToPrimitive for Opaque {
    fn to_i64(&self) -> Option<i64> {
        None
    }
    fn to_u64(&self) -> Option<u64> {
        None
    }
}

#[test]
fn test_pow_integer_exponent() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = pow_op(&mut graph, x, 3)?;
    assert_eq!(graph.value(y)?, 8.0);
    assert_eq!(*graph.node(y)?.op(), BackwardOp::Pow { base: x, exponent: 3.0 });

    graph.backward(y)?;
    assert_relative_eq!(graph.grad(x)?, 12.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_float_exponent() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(4.0);
    let y = pow_op(&mut graph, x, 0.5)?;
    assert_relative_eq!(graph.value(y)?, 2.0, epsilon = 1e-12);
    graph.backward(y)?;
    // 0.5 * 4^-0.5
    assert_relative_eq!(graph.grad(x)?, 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_negative_exponent() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = pow_op(&mut graph, x, -1)?;
    assert_relative_eq!(graph.value(y)?, 0.5, epsilon = 1e-12);
    graph.backward(y)?;
    assert_relative_eq!(graph.grad(x)?, -0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_zero_base_negative_exponent_is_not_trapped() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = pow_op(&mut graph, x, -2)?;
    assert!(graph.value(y)?.is_infinite());
    graph.backward(y)?;
    assert!(!graph.grad(x)?.is_finite());
    Ok(())
}

#[test]
fn test_pow_malformed_exponent_is_rejected() {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let result = pow_op(&mut graph, x, Opaque);
    assert_eq!(
        result,
        Err(AutogradError::MalformedExponent("Opaque".to_string()))
    );
    assert_eq!(graph.len(), 1);
}
