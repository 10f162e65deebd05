use common::{
    config::SolverConfig,
    error::Error,
    types::{MeanCycle, NodeId},
};
use tracing::{debug, trace};

use crate::csr::GraphCSR;
use crate::index::{EdgeVec, NodeVec};
use crate::queue::NodeQueue;
use crate::traits::MinMeanCycleSolver;
use crate::validate::validate_input;

/// Burns's algorithm: raise a lower bound on lambda until the critical subgraph has a cycle.
///
/// Keeps node potentials `dist` such that every edge slack
/// `dist[u] + w(u, v) - dist[v]` is at least `lambda`. Edges whose slack
/// equals `lambda` are critical. While the critical subgraph is acyclic, the
/// potentials are shifted along its longest paths and `lambda` grows by the
/// largest step that keeps every slack feasible.
#[derive(Debug, Clone, Default)]
pub struct BurnsSolver {
    config: SolverConfig,
}

#[derive(Debug, Clone, Copy)]
struct NodeState {
    /// Potential.
    dist: f64,
    /// Most negative critical-path length from a source of the critical subgraph.
    length: Option<i64>,
    /// Critical in-degree still unprocessed by the topological sort.
    indeg: usize,
}

impl BurnsSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    fn slack(state: &NodeVec<NodeState>, u: NodeId, v: NodeId, w: i64) -> f64 {
        state[u].dist + w as f64 - state[v].dist
    }

    /// Marks critical edges; returns how many there are.
    fn mark_critical(
        &self,
        graph: &GraphCSR,
        state: &NodeVec<NodeState>,
        lambda: f64,
        critical: &mut EdgeVec<bool>,
    ) -> usize {
        let tolerances = &self.config.tolerances;
        let mut count = 0;
        for (e, u, v, w) in graph.edges() {
            critical[e] = tolerances.is_critical(lambda, Self::slack(state, u, v, w));
            if critical[e] {
                count += 1;
            }
        }
        count
    }

    /// Topologically sorts the critical subgraph, recording path lengths.
    ///
    /// Returns the number of nodes dequeued; fewer than `n` means the
    /// critical subgraph has a cycle.
    fn sort_critical(
        graph: &GraphCSR,
        critical: &EdgeVec<bool>,
        state: &mut NodeVec<NodeState>,
        queue: &mut NodeQueue,
    ) -> Result<usize, Error> {
        queue.clear();

        for v in graph.nodes() {
            let indeg = graph.in_edges(v).filter(|&(e, _, _)| critical[e]).count();
            state[v].indeg = indeg;
            if indeg == 0 {
                state[v].length = Some(0);
                queue.put(v);
            } else {
                state[v].length = None;
            }
        }

        let mut visited = 0;
        while let Some(u) = queue.get() {
            visited += 1;

            let length_u = state[u].length.ok_or(Error::InvalidGraph)?;
            for (e, v, _) in graph.out_edges(u) {
                if !critical[e] {
                    continue;
                }
                let candidate = length_u - 1;
                state[v].length = Some(state[v].length.map_or(candidate, |l| l.min(candidate)));
                state[v].indeg -= 1;

                if state[v].indeg == 0 {
                    queue.put(v);
                }
            }
        }

        Ok(visited)
    }

    /// Main loop on an already validated graph and hint.
    pub(crate) fn refine(
        &self,
        graph: &GraphCSR,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error> {
        let n = graph.num_nodes();
        let min_weight = graph.min_weight().ok_or(Error::NoCycle)? as f64;
        let mut lambda = lambda_hint.map_or(min_weight, |hint| hint.min(min_weight));

        let initial = NodeState {
            dist: 0.0,
            length: None,
            indeg: 0,
        };
        let mut state = NodeVec::filled(n, initial);
        let mut critical = EdgeVec::filled(graph.num_edges(), false);
        let mut queue = NodeQueue::with_capacity(n);
        let mut iterations = 0;

        loop {
            iterations += 1;

            let num_critical = self.mark_critical(graph, &state, lambda, &mut critical);
            let visited = Self::sort_critical(graph, &critical, &mut state, &mut queue)?;

            trace!(iterations, lambda, num_critical, visited, "burns iteration");

            if visited != n {
                break;
            }

            // Every node was sorted, so every length is set.
            let lengths: NodeVec<i64> = state
                .iter()
                .map(|s| s.length)
                .collect::<Option<_>>()
                .ok_or(Error::InvalidGraph)?;

            let mut theta: Option<f64> = None;
            for (_, u, v, w) in graph.edges() {
                let delta = lengths[v] + 1 - lengths[u];
                if delta > 0 {
                    let step = (lambda - Self::slack(&state, u, v, w)) / delta as f64;
                    theta = Some(theta.map_or(step, |t| t.max(step)));
                }
            }
            // Around any cycle the deltas sum to its length, so one is positive.
            let theta = theta.ok_or(Error::NotStronglyConnected)?;

            lambda -= theta;
            for (s, &length) in state.iter_mut().zip(lengths.iter()) {
                s.dist -= theta * length as f64;
            }
        }

        debug!(
            nodes = n,
            edges = graph.num_edges(),
            lambda,
            iterations,
            "burns solved"
        );
        Ok(MeanCycle::new(lambda, iterations))
    }
}

impl MinMeanCycleSolver for BurnsSolver {
    fn name(&self) -> &'static str {
        "burns"
    }

    fn solve(
        &self,
        graph: &GraphCSR,
        plus_infinity: i64,
        lambda_hint: Option<f64>,
    ) -> Result<MeanCycle, Error> {
        let lambda_hint = validate_input(graph, plus_infinity, lambda_hint, &self.config)?;
        self.refine(graph, lambda_hint)
    }
}
