use std::hint::black_box;
use std::time::Instant;

use common::config::SolverConfig;
use mcm_core::{Algorithm, GraphCSR};
use perf_bench::*;

fn main() {
    for (num_nodes, chords) in BENCH_SIZES {
        let edges = generate_ring_with_chords(num_nodes, chords);
        let graph = match GraphCSR::from_edges(num_nodes, &edges) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Failed to build benchmark graph: {}", e);
                continue;
            }
        };

        println!(
            "--- Solver Benchmark ({} nodes, {} edges) ---",
            graph.num_nodes(),
            graph.num_edges()
        );

        for algorithm in Algorithm::ALL {
            let solver = algorithm.solver(SolverConfig::default());

            let start_time = Instant::now();
            let result = solver.solve(black_box(&graph), PLUS_INFINITY, None);
            let elapsed_time = start_time.elapsed();

            match black_box(result) {
                Ok(result) => println!(
                    "{:<8} lambda: {:>12.6}  iterations: {:>6}  elapsed: {:?}",
                    algorithm, result.lambda, result.iterations, elapsed_time
                ),
                Err(e) => println!("{:<8} failed: {}", algorithm, e),
            }
        }
    }
}
