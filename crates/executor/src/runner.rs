use std::time::Instant;
use tracing::{info, warn};

use super::types::SolveReport;
use common::config::SolverConfig;
use mcm_core::{Algorithm, GraphCSR};

/// Runs a selection of solvers on one graph and collects their answers.
pub struct Runner {
    config: SolverConfig,
    plus_infinity: i64,
    lambda_hint: Option<f64>,
}

impl Runner {
    pub fn new(config: SolverConfig, plus_infinity: i64, lambda_hint: Option<f64>) -> Self {
        Runner {
            config,
            plus_infinity,
            lambda_hint,
        }
    }

    /// Solver failures are recorded in the report, not propagated.
    pub fn run(&self, graph: &GraphCSR, algorithms: &[Algorithm]) -> Vec<SolveReport> {
        algorithms
            .iter()
            .map(|&algorithm| {
                let solver = algorithm.solver(self.config);

                let start = Instant::now();
                let outcome = solver.solve(graph, self.plus_infinity, self.lambda_hint);
                let elapsed = start.elapsed();

                match &outcome {
                    Ok(result) => info!(
                        %algorithm,
                        lambda = result.lambda,
                        iterations = result.iterations,
                        ?elapsed,
                        "solver finished"
                    ),
                    Err(e) => warn!(%algorithm, error = %e, "solver failed"),
                }

                SolveReport {
                    algorithm,
                    outcome,
                    elapsed,
                }
            })
            .collect()
    }
}

/// Largest pairwise difference between successful answers; `None` with fewer than two.
pub fn max_disagreement(reports: &[SolveReport]) -> Option<f64> {
    let lambdas: Vec<f64> = reports
        .iter()
        .filter_map(|report| report.outcome.as_ref().ok())
        .map(|result| result.lambda)
        .collect();

    if lambdas.len() < 2 {
        return None;
    }

    let min = lambdas.iter().copied().fold(f64::INFINITY, f64::min);
    let max = lambdas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(max - min)
}

/// Parses a runner selection: one solver name, or `all`.
pub fn parse_selection(name: &str) -> Result<Vec<Algorithm>, common::error::Error> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![name.parse()?])
}
