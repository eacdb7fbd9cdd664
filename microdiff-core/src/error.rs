use thiserror::Error;

/// Custom error type for the microdiff engine.
///
/// Numeric domain problems (division by zero, overflow, NaN) are deliberately
/// absent: they propagate as non-finite values instead of being reported here.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutogradError {
    #[error("Node {id} does not exist in this graph (graph holds {len} nodes)")]
    NodeNotFound { id: usize, len: usize },

    #[error("Exponent {0} cannot be represented as f64")]
    MalformedExponent(String),

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}
