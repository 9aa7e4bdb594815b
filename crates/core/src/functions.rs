//! Stateless math utilities for objectives and presentation layers.
//!
//! Nothing here depends on the solver. [`rastrigin`] is the default stress-test
//! objective; [`remap`] and [`euclidean_distance`] are used by drivers and
//! renderers to place particles on screen and to judge convergence.

use std::{convert::Infallible, f64::consts::TAU};

use crate::Objective;

/// The Rastrigin benchmark: `10·N + Σ (xᵢ² − 10·cos(2π·xᵢ))`.
///
/// Highly multimodal with a global minimum of `0` at the origin, which makes
/// premature convergence easy to observe. Usually searched on `[-5.12, 5.12]`.
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;

    x.iter()
        .fold(10.0 * n, |sum, &xi| sum + xi * xi - 10.0 * (TAU * xi).cos())
}

/// The Rastrigin benchmark as an [`Objective`], optionally pinned to a dimension.
///
/// A pinned dimension lets the solver reject a mismatched configuration
/// before any evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rastrigin {
    dimension: Option<usize>,
}

impl Rastrigin {
    /// Creates a Rastrigin objective that accepts any number of dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Rastrigin objective that expects exactly `dimension` coordinates.
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension: Some(dimension),
        }
    }
}

impl Objective for Rastrigin {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(rastrigin(x))
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }
}

/// Linearly maps `value` from the range `from` onto the range `to`.
///
/// Computes `(value - from[0]) * (to[1] - to[0]) / (from[1] - from[0]) + to[0]`.
/// Values outside `from` extrapolate; reversed ranges flip the direction.
///
/// The source range must not be degenerate: when `from[0] == from[1]` the
/// result is infinite or NaN.
#[must_use]
pub fn remap(value: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    let [from_low, from_high] = from;
    let [to_low, to_high] = to;
    (value - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}

/// Returns the Euclidean distance between two points.
///
/// Coordinates are paired positionally; if the slices differ in length the
/// extra coordinates of the longer one are ignored.
#[must_use]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(ai, bi)| (ai - bi).powi(2))
        .sum::<f64>()
        .sqrt()
}
