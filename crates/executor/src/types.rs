use std::path::PathBuf;
use std::time::Duration;

use super::error::Error;
use common::error::Error as MinMeanCycleError;
use common::types::{Edge, MeanCycle};
use mcm_core::{Algorithm, GraphCSR};

/// Where the graph under test comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Sim,
    Csv(PathBuf),
}

/// Contract for anything that can hand the runner an edge list.
///
/// Keeps `main` independent of the concrete source (CSV file vs. generated graph).
pub trait GraphSource {
    /// Node count and edge list, edge ids following list order.
    fn load_edges(&mut self) -> Result<(usize, Vec<Edge>), Error>;

    fn load_graph(&mut self) -> Result<GraphCSR, Error> {
        let (num_nodes, edges) = self.load_edges()?;
        Ok(GraphCSR::from_edges(num_nodes, &edges)?)
    }
}

/// Outcome of one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub outcome: Result<MeanCycle, MinMeanCycleError>,
    pub elapsed: Duration,
}
