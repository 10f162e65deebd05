use serde::Deserialize;

use crate::error::Error;

/// Floating-point tolerances shared by the iterative solvers.
///
/// The right values depend on the magnitude of the edge weights: too loose
/// and near-equal cycle means are merged, too tight and the loops stop
/// converging at floating precision.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Lawler's outer-loop width and Howard's minimum potential improvement.
    pub epsilon: f64,
    /// Lawler's bound-collapse threshold; a bisection step smaller than this ends the search.
    pub epsilon2: f64,
    /// Burns's critical-edge equality window.
    pub small_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            epsilon2: 1e-9,
            small_epsilon: 1e-6,
        }
    }
}

impl Tolerances {
    /// Rejects zero, negative, NaN or infinite tolerances.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("epsilon", self.epsilon),
            ("epsilon2", self.epsilon2),
            ("small_epsilon", self.small_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }

    /// Burns: an edge is critical when its slack equals lambda within `small_epsilon`.
    pub fn is_critical(&self, lambda: f64, slack: f64) -> bool {
        within(lambda, slack, self.small_epsilon)
    }

    /// Howard: `candidate` beats `current` by more than `epsilon`.
    pub fn improves(&self, current: f64, candidate: f64) -> bool {
        current - candidate > self.epsilon
    }

    /// Lawler: the search interval is still wider than `epsilon`.
    pub fn interval_open(&self, lower: f64, upper: f64) -> bool {
        upper - lower > self.epsilon
    }

    /// Lawler: moving a bound by `step` would not change it meaningfully.
    pub fn step_collapsed(&self, step: f64) -> bool {
        step < self.epsilon2
    }
}

/// `|a - b| < eps`
pub fn within(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
