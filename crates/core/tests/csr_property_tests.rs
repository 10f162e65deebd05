use common::types::{EdgeId, NodeId};
use mcm_core::csr::GraphCSR;
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn csr_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    NUM_NODES_STRATEGY.prop_flat_map(|num_nodes| {
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, -100i64..100);
        let edges_generator = prop::collection::vec(edge_generator, 0..50);

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

proptest! {
    /// Property: out-degrees and in-degrees each sum to the edge count
    #[test]
    fn degrees_sum_to_edge_count((num_nodes, edges) in csr_strategy()) {
        let csr = GraphCSR::from_edges(num_nodes, &edges).unwrap();

        let out_total: usize = csr.nodes().map(|v| csr.out_degree(v)).sum();
        let in_total: usize = csr.nodes().map(|v| csr.in_degree(v)).sum();
        prop_assert_eq!(out_total, edges.len());
        prop_assert_eq!(in_total, edges.len());
    }

    /// Property: every outgoing entry of `u` is an edge whose source is `u`, and likewise for incoming
    #[test]
    fn adjacency_agrees_with_edge_arrays((num_nodes, edges) in csr_strategy()) {
        let csr = GraphCSR::from_edges(num_nodes, &edges).unwrap();

        for u in csr.nodes() {
            for (e, v, w) in csr.out_edges(u) {
                prop_assert_eq!(csr.source(e), u);
                prop_assert_eq!(csr.target(e), v);
                prop_assert_eq!(csr.weight(e), w);
            }
            for (e, s, w) in csr.in_edges(u) {
                prop_assert_eq!(csr.target(e), u);
                prop_assert_eq!(csr.source(e), s);
                prop_assert_eq!(csr.weight(e), w);
            }
        }
    }

    /// Property: edge ids are input positions and survive the round trip through the CSR
    #[test]
    fn edge_ids_follow_input_order((num_nodes, edges) in csr_strategy()) {
        let csr = GraphCSR::from_edges(num_nodes, &edges).unwrap();

        for (i, &(u, v, w)) in edges.iter().enumerate() {
            prop_assert_eq!(csr.edge(EdgeId(i)), Ok((NodeId(u), NodeId(v), w)));
        }
        prop_assert_eq!(csr.to_edge_list(), edges);
    }

    /// Property: ith accessors walk each adjacency block in ascending edge id order
    #[test]
    fn ith_out_edges_are_sorted((num_nodes, edges) in csr_strategy()) {
        let csr = GraphCSR::from_edges(num_nodes, &edges).unwrap();

        for u in csr.nodes() {
            for i in 1..csr.out_degree(u) {
                prop_assert!(csr.ith_out_edge(u, i - 1) < csr.ith_out_edge(u, i));
            }
            for i in 1..csr.in_degree(u) {
                prop_assert!(csr.ith_in_edge(u, i - 1) < csr.ith_in_edge(u, i));
            }
        }
    }
}
