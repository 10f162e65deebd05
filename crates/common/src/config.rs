use serde::Deserialize;

use crate::error::Error;
use crate::numeric_kernel::Tolerances;

/// How Howard's solver improves its policy once the cycle scan is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyUpdate {
    /// Relax every edge in id order, adopting each improving edge immediately.
    #[default]
    EdgeSweep,
    /// For each node, adopt only the best improving outgoing edge.
    BestPerNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct HowardConfig {
    /// Consecutive non-improving cycle scans tolerated before stopping.
    /// `None` uses the node count.
    pub check_limit: Option<usize>,
    pub policy_update: PolicyUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LawlerConfig {
    /// Start the bisection from Burns's answer instead of the maximum edge weight.
    pub burns_upper_bound: bool,
}

/// Configuration threaded into every solver.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub tolerances: Tolerances,
    /// Verify strong connectivity before solving (O(n + m)).
    pub check_connectivity: bool,
    pub howard: HowardConfig,
    pub lawler: LawlerConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            check_connectivity: true,
            howard: HowardConfig::default(),
            lawler: LawlerConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), Error> {
        self.tolerances.validate()
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_checks_connectivity() {
        let config = SolverConfig::default();
        assert!(config.check_connectivity);
        assert_eq!(config.howard.check_limit, None);
        assert_eq!(config.howard.policy_update, PolicyUpdate::EdgeSweep);
        assert!(!config.lawler.burns_upper_bound);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_tolerances_replaces_only_tolerances() {
        let tol = Tolerances {
            epsilon: 1e-3,
            epsilon2: 1e-5,
            small_epsilon: 1e-4,
        };
        let config = SolverConfig::default().with_tolerances(tol);
        assert_eq!(config.tolerances, tol);
        assert!(config.check_connectivity);
    }
}
