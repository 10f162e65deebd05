use common::{
    config::SolverConfig,
    error::Error,
    types::{MeanCycle, NodeId},
};
use tracing::{debug, trace};

use crate::csr::GraphCSR;
use crate::index::DistTable;
use crate::traits::MinMeanCycleSolver;
use crate::validate::validate_input;

/// Karp's dynamic-programming algorithm.
///
/// `D[k][v]` is the cheapest walk of exactly `k` edges from node 0 to `v`.
/// Karp's theorem gives
/// `lambda = min_v max_{0 <= k < n} (D[n][v] - D[k][v]) / (n - k)`.
/// Exact in one pass, O(n·m) time and O(n²) memory. Ignores `lambda_hint`.
#[derive(Debug, Clone, Default)]
pub struct KarpSolver {
    config: SolverConfig,
}

impl KarpSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Fills `D[k][v]` for `k = 0..=n`.
    fn walk_table(&self, graph: &GraphCSR, plus_infinity: i64) -> Result<DistTable, Error> {
        let n = graph.num_nodes();
        let mut table = DistTable::new(n + 1, n);
        table.set(0, NodeId(0), Some(0));

        for k in 1..=n {
            for v in graph.nodes() {
                let mut best: Option<i64> = None;
                for (_, u, w) in graph.in_edges(v) {
                    let Some(prev) = table.get(k - 1, u) else {
                        continue;
                    };
                    let cost = prev.checked_add(w).ok_or(Error::SentinelOverflow {
                        bound: prev as i128 + w as i128,
                        sentinel: plus_infinity,
                    })?;
                    best = Some(best.map_or(cost, |b| b.min(cost)));
                }
                table.set(k, v, best);
            }
        }

        Ok(table)
    }
}

impl MinMeanCycleSolver for KarpSolver {
    fn name(&self) -> &'static str {
        "karp"
    }

    fn solve(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error> {
        validate_input(graph, plus_infinity, lambda_hint, &self.config)?;

        let n = graph.num_nodes();
        let table = self.walk_table(graph, plus_infinity)?;

        let mut lambda: Option<f64> = None;
        for v in graph.nodes() {
            // No walk of length n ends at v: its max term is +infinity.
            let Some(dn) = table.get(n, v) else {
                continue;
            };

            let mut worst: Option<f64> = None;
            for k in 0..n {
                let Some(dk) = table.get(k, v) else {
                    continue;
                };
                let term = (dn - dk) as f64 / (n - k) as f64;
                worst = Some(worst.map_or(term, |m| m.max(term)));
            }

            if let Some(worst) = worst {
                trace!(node = %v, max_term = worst, "karp column");
                lambda = Some(lambda.map_or(worst, |l| l.min(worst)));
            }
        }

        // Strong connectivity guarantees some node ends a walk of length n.
        let lambda = lambda.ok_or(Error::NotStronglyConnected)?;

        debug!(
            nodes = n,
            edges = graph.num_edges(),
            lambda,
            "karp solved"
        );
        Ok(MeanCycle::new(lambda, n))
    }
}
