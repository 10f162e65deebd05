use common::{
    config::{PolicyUpdate, SolverConfig},
    error::Error,
    types::{EdgeId, MeanCycle, NodeId},
};
use tracing::{debug, trace};

use crate::csr::GraphCSR;
use crate::index::NodeVec;
use crate::traits::MinMeanCycleSolver;
use crate::validate::validate_input;

/// Howard's policy iteration.
///
/// Every node follows exactly one outgoing edge (its policy), so each
/// component of the policy graph holds exactly one cycle. The best policy
/// cycle mean bounds lambda from above; the potentials are then relaxed
/// against that lambda and any improving edge replaces the node's policy.
///
/// Stops when no potential improves, or after `check_limit` consecutive
/// scans (default `n`) without a smaller cycle mean. The second rule is a
/// heuristic cap, not an optimality proof.
#[derive(Debug, Clone, Default)]
pub struct HowardSolver {
    config: SolverConfig,
}

/// The edge a node currently follows. Target and weight are cached to avoid
/// going back to the edge arrays during cycle scans.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Policy {
    edge: EdgeId,
    target: NodeId,
    weight: i64,
}

#[derive(Debug, Clone, Copy)]
struct NodeState {
    dist: f64,
    /// Start node of the scan that reached this node in the current pass.
    visited: Option<NodeId>,
    policy: Policy,
}

/// Cycles seen in one scan of the policy graph.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CycleScan {
    best_mean: f64,
    /// Policy edge leaving the scan's entry node on the best cycle.
    best_edge: EdgeId,
    cycles: usize,
    total_length: usize,
}

impl HowardSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Each node starts on its cheapest outgoing edge, lowest id on ties.
    fn initial_policy(graph: &GraphCSR) -> Result<NodeVec<NodeState>, Error> {
        graph
            .nodes()
            .map(|u| -> Result<NodeState, Error> {
                let (edge, target, weight) = graph
                    .out_edges(u)
                    .min_by_key(|&(_, _, w)| w)
                    .ok_or(Error::NotStronglyConnected)?;
                Ok(NodeState {
                    dist: weight as f64,
                    visited: None,
                    policy: Policy {
                        edge,
                        target,
                        weight,
                    },
                })
            })
            .collect()
    }

    /// Finds the cycle of every policy-graph component and the smallest cycle mean.
    fn scan_cycles(state: &mut NodeVec<NodeState>) -> Option<CycleScan> {
        for s in state.iter_mut() {
            s.visited = None;
        }

        let mut scan: Option<CycleScan> = None;
        for v in (0..state.len()).map(NodeId) {
            if state[v].visited.is_some() {
                continue;
            }

            let mut u = v;
            loop {
                state[u].visited = Some(v);
                u = state[u].policy.target;
                if state[u].visited.is_some() {
                    break;
                }
            }

            // The walk ran into an earlier component's tree or cycle.
            if state[u].visited != Some(v) {
                continue;
            }

            let start = u;
            let entry = state[start].policy.edge;
            let mut total_weight: i64 = 0;
            let mut length = 0;
            loop {
                length += 1;
                total_weight += state[u].policy.weight;
                u = state[u].policy.target;
                if u == start {
                    break;
                }
            }

            let mean = total_weight as f64 / length as f64;
            scan = Some(match scan {
                None => CycleScan {
                    best_mean: mean,
                    best_edge: entry,
                    cycles: 1,
                    total_length: length,
                },
                Some(prev) if mean < prev.best_mean => CycleScan {
                    best_mean: mean,
                    best_edge: entry,
                    cycles: prev.cycles + 1,
                    total_length: prev.total_length + length,
                },
                Some(prev) => CycleScan {
                    best_mean: prev.best_mean,
                    best_edge: prev.best_edge,
                    cycles: prev.cycles + 1,
                    total_length: prev.total_length + length,
                },
            });
        }

        scan
    }

    /// Relaxes every edge in id order; returns how many policies changed.
    fn sweep_edges(&self, graph: &GraphCSR, lambda: f64, state: &mut NodeVec<NodeState>) -> usize {
        let tolerances = &self.config.tolerances;
        let mut updates = 0;
        for (edge, u, v, weight) in graph.edges() {
            let candidate = state[v].dist - lambda + weight as f64;
            if tolerances.improves(state[u].dist, candidate) {
                state[u].dist = candidate;
                state[u].policy = Policy {
                    edge,
                    target: v,
                    weight,
                };
                updates += 1;
            }
        }
        updates
    }

    /// Moves each node to its best improving outgoing edge, if any; returns the improvement count.
    fn best_per_node(
        &self,
        graph: &GraphCSR,
        lambda: f64,
        state: &mut NodeVec<NodeState>,
    ) -> usize {
        let tolerances = &self.config.tolerances;
        let mut updates = 0;
        for u in graph.nodes() {
            let mut best = state[u].dist;
            let mut chosen = None;
            for (edge, v, weight) in graph.out_edges(u) {
                let candidate = state[v].dist - lambda + weight as f64;
                if tolerances.improves(best, candidate) {
                    best = candidate;
                    chosen = Some(Policy {
                        edge,
                        target: v,
                        weight,
                    });
                    updates += 1;
                }
            }
            if let Some(policy) = chosen {
                state[u].dist = best;
                state[u].policy = policy;
            }
        }
        updates
    }
}

impl MinMeanCycleSolver for HowardSolver {
    fn name(&self) -> &'static str {
        "howard"
    }

    fn solve(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error> {
        let lambda_hint = validate_input(graph, plus_infinity, lambda_hint, &self.config)?;

        let n = graph.num_nodes();
        let check_limit = self.config.howard.check_limit.unwrap_or(n);

        let mut state = Self::initial_policy(graph)?;
        let mut lambda = lambda_hint.unwrap_or(f64::INFINITY);
        let mut check_count = 0;
        let mut iterations = 0;

        loop {
            iterations += 1;

            let scan = Self::scan_cycles(&mut state).ok_or(Error::InvalidGraph)?;
            if scan.best_mean < lambda {
                lambda = scan.best_mean;
                check_count = 0;
            }

            if check_count > check_limit {
                debug!(iterations, check_limit, "howard: check limit reached");
                break;
            }
            check_count += 1;

            let updates = match self.config.howard.policy_update {
                PolicyUpdate::EdgeSweep => self.sweep_edges(graph, lambda, &mut state),
                PolicyUpdate::BestPerNode => self.best_per_node(graph, lambda, &mut state),
            };

            trace!(
                iterations,
                lambda,
                cycles = scan.cycles,
                best_edge = %scan.best_edge,
                cycle_length = scan.total_length,
                updates,
                "howard iteration"
            );

            if updates == 0 {
                break;
            }
        }

        debug!(
            nodes = n,
            edges = graph.num_edges(),
            lambda,
            iterations,
            "howard solved"
        );
        Ok(MeanCycle::new(lambda, iterations))
    }
}
