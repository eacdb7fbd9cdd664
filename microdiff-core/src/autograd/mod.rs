//! # Reverse-mode differentiation
//!
//! - [`BackwardOp`]: the tagged local rule stored on every node.
//! - [`graph::topological_sort`]: parents-first ordering of a root's ancestors.
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The backward pass itself is [`Graph::backward`](crate::graph::Graph::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::topological_sort;
