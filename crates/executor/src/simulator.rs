use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::GraphSource;
use common::types::Edge;

/// Produces random strongly connected graphs for simulation purposes.
///
/// Every graph is a Hamiltonian ring `0 -> 1 -> ... -> n-1 -> 0` plus
/// `extra_edges` random chords (self-loops and parallel edges allowed),
/// with weights drawn uniformly from `[min_weight, max_weight]`. The ring
/// guarantees strong connectivity.
pub struct GraphSimulator {
    config: SimulatorConfig,
    rng: SmallRng,
}

impl GraphSimulator {
    pub fn new(config: SimulatorConfig) -> Result<Self, Error> {
        if config.total_nodes == 0 {
            return Err(Error::InvalidSimulation(
                "total_nodes must be at least 1".to_string(),
            ));
        }
        if config.min_weight > config.max_weight {
            return Err(Error::InvalidSimulation(format!(
                "min_weight {} exceeds max_weight {}",
                config.min_weight, config.max_weight
            )));
        }

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(GraphSimulator { config, rng })
    }

    fn generate_edges(&mut self) -> Vec<Edge> {
        let n = self.config.total_nodes;
        let weight_range = self.config.min_weight..=self.config.max_weight;

        let mut edges: Vec<Edge> = Vec::with_capacity(n + self.config.extra_edges);
        for u in 0..n {
            let w = self.rng.random_range(weight_range.clone());
            edges.push((u, (u + 1) % n, w));
        }

        for _ in 0..self.config.extra_edges {
            let from = self.rng.random_range(0..n);
            let to = self.rng.random_range(0..n);
            let w = self.rng.random_range(weight_range.clone());
            edges.push((from, to, w));
        }

        edges
    }
}

impl GraphSource for GraphSimulator {
    fn load_edges(&mut self) -> Result<(usize, Vec<Edge>), Error> {
        let edges = self.generate_edges();
        info!(
            nodes = self.config.total_nodes,
            edges = edges.len(),
            seed = ?self.config.seed,
            "generated random graph"
        );
        Ok((self.config.total_nodes, edges))
    }
}
