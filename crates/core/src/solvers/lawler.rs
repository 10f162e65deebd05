use common::{
    config::SolverConfig,
    error::Error,
    types::{MeanCycle, NodeId},
};
use tracing::{debug, trace};

use super::burns::BurnsSolver;
use crate::csr::GraphCSR;
use crate::index::NodeVec;
use crate::queue::{PhaseItem, PhaseQueue};
use crate::traits::MinMeanCycleSolver;
use crate::validate::validate_input;

/// Relaxations start here.
const SOURCE: NodeId = NodeId(0);

/// Lawler's algorithm: binary search on lambda with a Bellman-Ford negative-cycle test.
///
/// With every weight reduced by `lambda`, the reduced graph has a negative
/// cycle exactly when the minimum cycle mean is below `lambda`.
#[derive(Debug, Clone, Default)]
pub struct LawlerSolver {
    config: SolverConfig,
}

#[derive(Debug, Clone, Copy)]
struct NodeState {
    /// Shortest reduced distance from the source found so far; `None` = unreached.
    dist: Option<f64>,
    /// Not currently in the queue.
    not_included: bool,
}

impl LawlerSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Phased Bellman-Ford from [`SOURCE`] with weights `w - lambda`.
    ///
    /// Each phase relaxes the nodes improved in the previous one. Shortest
    /// paths without a negative cycle have fewer than `n` edges, so relaxations
    /// still pending after `n` phases prove a negative cycle.
    fn has_negative_cycle(
        graph: &GraphCSR,
        lambda: f64,
        state: &mut NodeVec<NodeState>,
        queue: &mut PhaseQueue,
    ) -> bool {
        let n = graph.num_nodes();

        state.fill(NodeState {
            dist: None,
            not_included: true,
        });
        state[SOURCE] = NodeState {
            dist: Some(0.0),
            not_included: false,
        };

        queue.clear();
        queue.put(SOURCE);
        queue.put_end_phase();

        let mut phases = 0;
        while phases < n {
            let Some(item) = queue.get() else {
                return false;
            };

            let u = match item {
                PhaseItem::EndPhase => {
                    phases += 1;
                    if queue.is_empty() {
                        return false;
                    }
                    queue.put_end_phase();
                    continue;
                }
                PhaseItem::Node(u) => u,
            };

            state[u].not_included = true;
            let Some(dist_u) = state[u].dist else {
                continue;
            };
            let reduced = dist_u - lambda;

            for (_, v, w) in graph.out_edges(u) {
                let candidate = reduced + w as f64;
                if state[v].dist.is_none_or(|d| candidate < d) {
                    state[v].dist = Some(candidate);
                    if state[v].not_included {
                        state[v].not_included = false;
                        queue.put(v);
                    }
                }
            }
        }

        true
    }

    /// Initial search interval `[lower, upper]`. Expects a validated graph.
    fn bounds(&self, graph: &GraphCSR) -> Result<(f64, f64), Error> {
        let lower = graph.min_weight().ok_or(Error::NoCycle)? as f64;
        let upper = if self.config.lawler.burns_upper_bound {
            BurnsSolver::new(self.config).refine(graph, None)?.lambda
        } else {
            graph.max_weight().ok_or(Error::NoCycle)? as f64
        };
        Ok((lower, upper))
    }
}

impl MinMeanCycleSolver for LawlerSolver {
    fn name(&self) -> &'static str {
        "lawler"
    }

    fn solve(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error> {
        let lambda_hint = validate_input(graph, plus_infinity, lambda_hint, &self.config)?;

        let tolerances = &self.config.tolerances;
        let (mut lower, mut upper) = self.bounds(graph)?;

        if let Some(hint) = lambda_hint {
            // No cycle mean is below the smallest edge weight.
            if hint <= lower {
                debug!(hint, lower, "lawler: hint at or below min edge weight");
                return Ok(MeanCycle::new(hint, 0));
            }
            upper = upper.min(2.0 * hint - lower);
        }

        let n = graph.num_nodes();
        let mut state = NodeVec::filled(
            n,
            NodeState {
                dist: None,
                not_included: true,
            },
        );
        let mut queue = PhaseQueue::with_capacity(n);

        let mut lambda = upper;
        let mut iterations = 0;

        while tolerances.interval_open(lower, upper) {
            lambda = (upper + lower) / 2.0;
            iterations += 1;

            let negative = Self::has_negative_cycle(graph, lambda, &mut state, &mut queue);
            trace!(iterations, lambda, lower, upper, negative, "lawler iteration");

            if negative {
                if tolerances.step_collapsed(upper - lambda) {
                    break;
                }
                upper = lambda;
            } else {
                if tolerances.step_collapsed(lambda - lower) {
                    break;
                }
                lower = lambda;
            }
        }

        debug!(
            nodes = n,
            edges = graph.num_edges(),
            lambda,
            iterations,
            "lawler solved"
        );
        Ok(MeanCycle::new(lambda, iterations))
    }
}
