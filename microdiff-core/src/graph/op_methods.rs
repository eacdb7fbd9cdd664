//! Method-style wrappers over the operation library.

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::Operand;
use num_traits::ToPrimitive;
use std::fmt::Debug;

impl Graph {
    /// See [`add_op`].
    pub fn add(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        add_op(self, a, b)
    }

    /// See [`sub_op`].
    pub fn sub(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        sub_op(self, a, b)
    }

    /// See [`mul_op`].
    pub fn mul(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        mul_op(self, a, b)
    }

    /// See [`div_op`].
    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        div_op(self, a, b)
    }

    /// See [`pow_op`].
    pub fn pow<E: ToPrimitive + Debug>(
        &mut self,
        base: impl Into<Operand>,
        exponent: E,
    ) -> Result<NodeId, AutogradError> {
        pow_op(self, base, exponent)
    }

    /// See [`exp_op`].
    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        exp_op(self, a)
    }

    /// See [`relu_op`].
    pub fn relu(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        relu_op(self, a)
    }

    /// See [`neg_op`].
    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        neg_op(self, a)
    }
}
