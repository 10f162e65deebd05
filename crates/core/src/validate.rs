//! Input checks every solver runs before entering its main loop.

use common::config::SolverConfig;
use common::error::Error;
use common::types::NodeId;

use crate::csr::GraphCSR;
use crate::index::NodeVec;
use crate::queue::NodeQueue;

/// Fails fast on inputs the solvers cannot answer correctly.
///
/// Checks, in order: tolerances are usable, the hint is a number above
/// negative infinity, the graph has nodes and edges, `plus_infinity` exceeds
/// every finite value a solver may compute, and (when
/// `config.check_connectivity` is set) the graph is strongly connected.
///
/// Returns the hint the solver should use: `+inf` carries no bound and
/// becomes `None`.
///
/// The bound used for the sentinel is `2 * n * max|w|`: Karp's walks have at
/// most `n` edges, and Lawler's reduced distances add at most `|lambda| <=
/// max|w|` per edge.
pub fn validate_input(
    graph: &GraphCSR,
    plus_infinity: i64,
    lambda_hint: Option<f64>,
    config: &SolverConfig,
) -> Result<Option<f64>, Error> {
    config.validate()?;
    let lambda_hint = normalize_hint(lambda_hint)?;

    if graph.num_nodes() == 0 {
        return Err(Error::EmptyGraph);
    }

    let max_abs = graph.max_abs_weight().ok_or(Error::NoCycle)?;

    let bound = path_cost_bound(graph.num_nodes(), max_abs);
    if plus_infinity <= 0 || bound >= plus_infinity as i128 {
        return Err(Error::SentinelOverflow {
            bound,
            sentinel: plus_infinity,
        });
    }

    if config.check_connectivity && !is_strongly_connected(graph) {
        return Err(Error::NotStronglyConnected);
    }

    Ok(lambda_hint)
}

fn normalize_hint(lambda_hint: Option<f64>) -> Result<Option<f64>, Error> {
    match lambda_hint {
        Some(hint) if hint.is_nan() || hint == f64::NEG_INFINITY => Err(Error::InvalidHint(hint)),
        Some(hint) if hint == f64::INFINITY => Ok(None),
        hint => Ok(hint),
    }
}

fn path_cost_bound(num_nodes: usize, max_abs_weight: i128) -> i128 {
    (num_nodes as i128)
        .saturating_mul(2)
        .saturating_mul(max_abs_weight)
}

/// Every node reaches node 0 and is reached from it.
pub fn is_strongly_connected(graph: &GraphCSR) -> bool {
    if graph.num_nodes() == 0 {
        return false;
    }
    let root = NodeId(0);
    reachable_count(graph, root, Direction::Forward) == graph.num_nodes()
        && reachable_count(graph, root, Direction::Backward) == graph.num_nodes()
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Breadth-first sweep from `root`; returns the number of nodes seen.
fn reachable_count(graph: &GraphCSR, root: NodeId, direction: Direction) -> usize {
    let mut seen = NodeVec::filled(graph.num_nodes(), false);
    let mut queue = NodeQueue::with_capacity(graph.num_nodes());

    seen[root] = true;
    queue.put(root);
    let mut count = 1;

    while let Some(u) = queue.get() {
        let mut visit = |v: NodeId| {
            if !seen[v] {
                seen[v] = true;
                count += 1;
                queue.put(v);
            }
        };
        match direction {
            Direction::Forward => graph.out_edges(u).for_each(|(_, v, _)| visit(v)),
            Direction::Backward => graph.in_edges(u).for_each(|(_, v, _)| visit(v)),
        }
    }

    count
}
