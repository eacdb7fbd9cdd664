//! # microdiff-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Expressions are recorded into a [`Graph`] arena as they are evaluated: leaves hold
//! raw inputs, every operation appends a node tagged with its local derivative rule.
//! [`Graph::backward`] then seeds the chosen output with gradient `1.0` and applies the
//! chain rule in reverse topological order, leaving `d(output)/d(node)` on every
//! contributing node.
//!
//! ```
//! use microdiff_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let c = graph.leaf(10.0);
//! let ab = graph.mul(a, b)?;
//! let d = graph.add(ab, c)?;
//! let e = graph.relu(d)?;
//! graph.backward(e)?;
//!
//! assert_eq!(graph.value(e)?, 4.0);
//! assert_eq!(graph.grad(a)?, -3.0);
//! assert_eq!(graph.grad(b)?, 2.0);
//! # Ok::<(), microdiff_core::AutogradError>(())
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

pub use autograd::{check_grad, BackwardOp, GradCheckConfig, GradCheckError};
pub use error::AutogradError;
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use ops::Operand;
