//! The four interchangeable minimum mean cycle algorithms.

pub mod burns;
pub mod howard;
pub mod karp;
pub mod lawler;

use std::fmt;
use std::str::FromStr;

use common::{config::SolverConfig, error::Error};

pub use burns::BurnsSolver;
pub use howard::HowardSolver;
pub use karp::KarpSolver;
pub use lawler::LawlerSolver;

use crate::traits::MinMeanCycleSolver;

/// Selector over the available solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Karp,
    Burns,
    Lawler,
    Howard,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Karp,
        Algorithm::Burns,
        Algorithm::Lawler,
        Algorithm::Howard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Karp => "karp",
            Algorithm::Burns => "burns",
            Algorithm::Lawler => "lawler",
            Algorithm::Howard => "howard",
        }
    }

    /// Builds the solver for this algorithm with the given configuration.
    pub fn solver(self, config: SolverConfig) -> Box<dyn MinMeanCycleSolver + Send + Sync> {
        match self {
            Algorithm::Karp => Box::new(KarpSolver::new(config)),
            Algorithm::Burns => Box::new(BurnsSolver::new(config)),
            Algorithm::Lawler => Box::new(LawlerSolver::new(config)),
            Algorithm::Howard => Box::new(HowardSolver::new(config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "karp" => Ok(Algorithm::Karp),
            "burns" => Ok(Algorithm::Burns),
            "lawler" => Ok(Algorithm::Lawler),
            "howard" => Ok(Algorithm::Howard),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Karp".parse::<Algorithm>(), Ok(Algorithm::Karp));
        assert_eq!("HOWARD".parse::<Algorithm>(), Ok(Algorithm::Howard));
        assert_eq!(
            "bellman".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("bellman".to_string()))
        );
    }

    #[test]
    fn solver_name_matches_selector() {
        for algorithm in Algorithm::ALL {
            let solver = algorithm.solver(SolverConfig::default());
            assert_eq!(solver.name(), algorithm.name());
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }
}
