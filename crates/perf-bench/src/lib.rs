// ----------------------------
// Benchmark graphs
// ----------------------------

use common::types::Edge;

/// Graph sizes (nodes, extra chords) timed by `bench_solvers`.
pub const BENCH_SIZES: [(usize, usize); 3] = [(64, 256), (256, 1_024), (1_024, 4_096)];

pub const WEIGHT_SPAN: i64 = 100;

/// Sentinel passed to every solver; far above `2 * n * WEIGHT_SPAN` for the sizes above.
pub const PLUS_INFINITY: i64 = 1 << 40;

/// Generates a strongly connected ring of `num_nodes` nodes plus `chords` extra edges.
///
/// Endpoints and weights are spread with fixed multiplicative hashes instead
/// of an RNG, so every run times exactly the same graph.
pub fn generate_ring_with_chords(num_nodes: usize, chords: usize) -> Vec<Edge> {
    let ring = (0..num_nodes).map(|u| (u, (u + 1) % num_nodes, spread_weight(u)));

    let extra = (0..chords).map(|i| {
        let from = i.wrapping_mul(7_919) % num_nodes;
        let to = i.wrapping_mul(104_729).wrapping_add(3) % num_nodes;
        (from, to, spread_weight(i + num_nodes))
    });

    ring.chain(extra).collect()
}

/// Maps `i` into `[-WEIGHT_SPAN, WEIGHT_SPAN]`.
fn spread_weight(i: usize) -> i64 {
    let span = (2 * WEIGHT_SPAN + 1) as usize;
    (i.wrapping_mul(2_654_435_761) % span) as i64 - WEIGHT_SPAN
}
