use common::config::SolverConfig;
use common::error::Error;
use mcm_core::{Algorithm, GraphCSR, MinMeanCycleSolver};
use proptest::prelude::*;

const INF: i64 = 1_000_000_000;
const TOLERANCE: f64 = 1e-4;

fn build_graph(n: usize, edges: &[(usize, usize, i64)]) -> GraphCSR {
    GraphCSR::from_edges(n, edges).unwrap()
}

fn solvers() -> Vec<(Algorithm, Box<dyn MinMeanCycleSolver + Send + Sync>)> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, algorithm.solver(SolverConfig::default())))
        .collect()
}

fn assert_all_close(graph: &GraphCSR, expected: f64) {
    for (algorithm, solver) in solvers() {
        let lambda = solver.find_min_cycle_mean(graph, INF, None).unwrap();
        assert!(
            (lambda - expected).abs() < TOLERANCE,
            "{algorithm}: got {lambda}, expected {expected}"
        );
    }
}

/// Two disjoint cycles of means 3 and 7 joined by expensive connectors.
fn two_cycle_graph() -> GraphCSR {
    build_graph(
        6,
        &[
            (0, 1, 2),
            (1, 2, 4),
            (2, 0, 3),
            (3, 4, 7),
            (4, 5, 6),
            (5, 3, 8),
            (2, 3, 20),
            (5, 0, 20),
        ],
    )
}

#[test]
fn self_loop_is_the_answer() {
    let graph = build_graph(1, &[(0, 0, 5)]);
    for (algorithm, solver) in solvers() {
        let lambda = solver.find_min_cycle_mean(&graph, INF, None).unwrap();
        assert_eq!(lambda, 5.0, "{algorithm}");
    }
}

#[test]
fn cheap_self_loop_beats_the_ring() {
    let graph = build_graph(3, &[(0, 1, 10), (1, 2, 10), (2, 0, 10), (1, 1, -4)]);
    assert_all_close(&graph, -4.0);
}

#[test]
fn uniform_weights_give_exact_mean() {
    let mut edges = Vec::new();
    for u in 0..4 {
        for v in 0..4 {
            edges.push((u, v, 7));
        }
    }
    let graph = build_graph(4, &edges);

    for (algorithm, solver) in solvers() {
        let lambda = solver.find_min_cycle_mean(&graph, INF, None).unwrap();
        assert_eq!(lambda, 7.0, "{algorithm}");
    }
}

#[test]
fn uniform_ring_gives_exact_mean() {
    for n in [2, 5, 9] {
        let edges: Vec<_> = (0..n).map(|u| (u, (u + 1) % n, -3)).collect();
        let graph = build_graph(n, &edges);

        for (algorithm, solver) in solvers() {
            let lambda = solver.find_min_cycle_mean(&graph, INF, None).unwrap();
            assert_eq!(lambda, -3.0, "{algorithm} on a ring of {n}");
        }
    }
}

#[test]
fn picks_the_cheaper_of_two_cycles() {
    assert_all_close(&two_cycle_graph(), 3.0);
}

#[test]
fn handles_negative_weights() {
    // 0 -> 1 -> 0 has mean -1.5; 0 -> 1 -> 2 -> 0 has mean -2.
    let graph = build_graph(3, &[(0, 1, -5), (1, 2, -1), (2, 0, 0), (1, 0, 2)]);
    assert_all_close(&graph, -2.0);
}

#[test]
fn non_integral_mean() {
    // Only cycle: 0 -> 1 -> 2 -> 0 with total 10 over 3 edges.
    let graph = build_graph(3, &[(0, 1, 3), (1, 2, 3), (2, 0, 4)]);
    assert_all_close(&graph, 10.0 / 3.0);
}

#[test]
fn repeated_solves_are_identical() {
    let graph = two_cycle_graph();
    for (algorithm, solver) in solvers() {
        let first = solver.solve(&graph, INF, None).unwrap();
        let second = solver.solve(&graph, INF, None).unwrap();
        assert_eq!(first, second, "{algorithm}");
    }
}

#[test]
fn hint_above_optimum_does_not_change_the_answer() {
    let graph = two_cycle_graph();
    for algorithm in [Algorithm::Burns, Algorithm::Lawler] {
        let solver = algorithm.solver(SolverConfig::default());
        let plain = solver.find_min_cycle_mean(&graph, INF, None).unwrap();
        for hint in [3.0, 4.5, 100.0] {
            let hinted = solver.find_min_cycle_mean(&graph, INF, Some(hint)).unwrap();
            assert!(
                (plain - hinted).abs() < TOLERANCE,
                "{algorithm} with hint {hint}: {plain} vs {hinted}"
            );
        }
    }
}

#[test]
fn every_solver_rejects_non_numeric_hints() {
    let graph = build_graph(3, &[(0, 1, 1), (1, 2, 2), (2, 0, 3), (1, 0, 9)]);
    for (algorithm, solver) in solvers() {
        assert!(
            matches!(
                solver.solve(&graph, INF, Some(f64::NAN)),
                Err(Error::InvalidHint(h)) if h.is_nan()
            ),
            "{algorithm}"
        );
        assert_eq!(
            solver.solve(&graph, INF, Some(f64::NEG_INFINITY)),
            Err(Error::InvalidHint(f64::NEG_INFINITY)),
            "{algorithm}"
        );
    }
}

#[test]
fn infinite_hint_is_no_hint() {
    let graph = build_graph(3, &[(0, 1, 1), (1, 2, 2), (2, 0, 3), (1, 0, 9)]);
    for (algorithm, solver) in solvers() {
        let hinted = solver.solve(&graph, INF, Some(f64::INFINITY)).unwrap();
        let plain = solver.solve(&graph, INF, None).unwrap();
        assert_eq!(hinted, plain, "{algorithm}");
        assert!((hinted.lambda - 2.0).abs() < TOLERANCE, "{algorithm}");
    }
}

#[test]
fn every_solver_rejects_empty_graph() {
    let graph = build_graph(0, &[]);
    for (algorithm, solver) in solvers() {
        assert_eq!(
            solver.solve(&graph, INF, None),
            Err(Error::EmptyGraph),
            "{algorithm}"
        );
    }
}

#[test]
fn every_solver_rejects_edgeless_graph() {
    let graph = build_graph(3, &[]);
    for (algorithm, solver) in solvers() {
        assert_eq!(
            solver.solve(&graph, INF, None),
            Err(Error::NoCycle),
            "{algorithm}"
        );
    }
}

#[test]
fn every_solver_rejects_disconnected_graph() {
    let graph = build_graph(3, &[(0, 1, 1), (1, 0, 1), (2, 2, 1)]);
    for (algorithm, solver) in solvers() {
        assert_eq!(
            solver.solve(&graph, INF, None),
            Err(Error::NotStronglyConnected),
            "{algorithm}"
        );
    }
}

#[test]
fn every_solver_rejects_small_sentinel() {
    let graph = build_graph(2, &[(0, 1, 1_000), (1, 0, 1_000)]);
    for (algorithm, solver) in solvers() {
        assert!(
            matches!(
                solver.solve(&graph, 100, None),
                Err(Error::SentinelOverflow {
                    bound: 4_000,
                    sentinel: 100
                })
            ),
            "{algorithm}"
        );
    }
}

fn ring_with_chords() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..=8).prop_flat_map(|n| {
        let ring = prop::collection::vec(-20i64..20, n);
        let chords = prop::collection::vec((0..n, 0..n, -20i64..20), 0..12);
        (Just(n), ring, chords).prop_map(|(n, ring, chords)| {
            let mut edges: Vec<_> = ring
                .into_iter()
                .enumerate()
                .map(|(u, w)| (u, (u + 1) % n, w))
                .collect();
            edges.extend(chords);
            (n, edges)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: all four solvers agree with Karp's exact answer
    #[test]
    fn solvers_agree_on_random_graphs((n, edges) in ring_with_chords()) {
        let graph = build_graph(n, &edges);
        let reference = Algorithm::Karp
            .solver(SolverConfig::default())
            .find_min_cycle_mean(&graph, INF, None)
            .unwrap();

        for (algorithm, solver) in solvers() {
            let lambda = solver.find_min_cycle_mean(&graph, INF, None).unwrap();
            prop_assert!(
                (lambda - reference).abs() < TOLERANCE,
                "{} got {} but karp got {}", algorithm, lambda, reference
            );
        }
    }

    /// Property: the minimum cycle mean lies between the extreme edge weights
    #[test]
    fn mean_is_bounded_by_edge_weights((n, edges) in ring_with_chords()) {
        let graph = build_graph(n, &edges);
        let lower = graph.min_weight().unwrap() as f64;
        let upper = graph.max_weight().unwrap() as f64;

        let lambda = Algorithm::Karp
            .solver(SolverConfig::default())
            .find_min_cycle_mean(&graph, INF, None)
            .unwrap();
        prop_assert!(lambda >= lower - TOLERANCE);
        prop_assert!(lambda <= upper + TOLERANCE);
    }
}
