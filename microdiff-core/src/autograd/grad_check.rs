use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check needs at least one input")]
    EmptyInputs,

    #[error("Graph error during gradient check: {0}")]
    Graph(AutogradError),
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::Graph(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the central difference.
    pub epsilon: f64,
    /// Maximum accepted absolute (and relative) difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-5,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` builds an expression over the given leaves on a fresh [`Graph`] and returns
/// its output node. For each input \( x_i \) the analytic \( \frac{\partial f}{\partial x_i} \)
/// from one backward pass is compared with
/// \\[ \frac{f(x_i + \varepsilon) - f(x_i - \varepsilon)}{2 \varepsilon} \\]
/// A mismatch is reported only if the difference exceeds `tolerance` both in absolute
/// terms and relative to the analytic value.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }
    let epsilon = config.epsilon;

    // --- Analytical gradients ---
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<f64>, AutogradError>>()?;

    // --- Numerical gradients ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let value_plus = evaluate(&func, inputs, i, epsilon)?;
        let value_minus = evaluate(&func, inputs, i, -epsilon)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        log::debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > config.tolerance
            && difference / (analytical_grad.abs() + epsilon) > config.tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Evaluates `func` on a fresh graph with input `index` shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += delta;
    let mut graph = Graph::new();
    let leaves = graph.leaves(&shifted);
    let output = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_polynomial() {
        // f(x, y) = x^3 - 2xy + y
        let result = check_grad(
            |g, x| {
                let x3 = g.pow(x[0], 3)?;
                let xy = g.mul(x[0], x[1])?;
                let two_xy = g.mul(2.0, xy)?;
                let lhs = g.sub(x3, two_xy)?;
                g.add(lhs, x[1])
            },
            &[1.3, -0.4],
            &GradCheckConfig::default(),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_mismatch_at_relu_kink() {
        // relu' jumps at 0; a step that straddles it disagrees with the one-sided slope.
        let config = GradCheckConfig {
            epsilon: 1e-3,
            tolerance: 1e-4,
        };
        let result = check_grad(|g, x| g.relu(x[0]), &[0.0], &config);
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_detects_untracked_dependency() {
        // The second factor is read out as a plain number, so the graph only sees
        // d(x * c)/dx = c while the function really computes x^2.
        let result = check_grad(
            |g, x| {
                let frozen = g.value(x[0])?;
                g.mul(x[0], frozen)
            },
            &[1.5],
            &GradCheckConfig::default(),
        );
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert!((analytical_grad - 1.5).abs() < 1e-12);
                assert!((numerical_grad - 3.0).abs() < 1e-4);
            }
            other => panic!("expected a gradient mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_empty_inputs() {
        let result = check_grad(|g, _| Ok(g.leaf(1.0)), &[], &GradCheckConfig::default());
        assert_eq!(result, Err(GradCheckError::EmptyInputs));
    }

    #[test]
    fn test_check_grad_reports_non_finite() {
        let result = check_grad(|g, x| g.div(1.0, x[0]), &[0.0], &GradCheckConfig::default());
        assert!(matches!(
            result,
            Err(GradCheckError::NumericalGradNaNOrInfinite { .. })
                | Err(GradCheckError::AnalyticalGradNaNOrInfinite { .. })
        ));
    }

    #[test]
    fn test_check_grad_forward_error() {
        let result = check_grad(
            |g, _| g.exp(NodeId(100)),
            &[1.0],
            &GradCheckConfig::default(),
        );
        assert!(matches!(result, Err(GradCheckError::ForwardPassError(_))));
    }
}
