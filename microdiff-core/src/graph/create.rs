// src/graph/create.rs

use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use rand::Rng;
use rand_distr::{Distribution, Normal};

impl Graph {
    /// Records a leaf node holding `value`.
    ///
    /// Leaves have no parents, start with a zero gradient and their backward rule is a no-op.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Records one leaf per value, in order.
    pub fn leaves(&mut self, values: &[f64]) -> Vec<NodeId> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Records a leaf sampled uniformly from `[low, high)`.
    ///
    /// # Errors
    /// `InvalidDistribution` if either bound is not finite or `low >= high`.
    pub fn rand_uniform<R: Rng + ?Sized>(
        &mut self,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<NodeId, AutogradError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(AutogradError::InvalidDistribution(format!(
                "uniform range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        let value = rng.gen_range(low..high);
        Ok(self.leaf(value))
    }

    /// Records a leaf sampled from a normal distribution.
    ///
    /// # Errors
    /// `InvalidDistribution` if `mean` or `std_dev` is not finite, or `std_dev` is negative.
    pub fn randn<R: Rng + ?Sized>(
        &mut self,
        mean: f64,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<NodeId, AutogradError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return Err(AutogradError::InvalidDistribution(format!(
                "normal with mean {} and std_dev {} is not a valid distribution",
                mean, std_dev
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| AutogradError::InvalidDistribution(format!("normal: {}", e)))?;
        Ok(self.leaf(normal.sample(rng)))
    }
}
