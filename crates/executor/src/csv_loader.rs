use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{error, info};

use super::error::Error;
use super::types::GraphSource;
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight: i64,
}

/// Reads an edge list with a `from,to,weight` header; other columns are ignored.
///
/// The node count is one past the largest endpoint seen.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: PathBuf) -> Self {
        CsvLoader { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to open edge list");
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight));
        }
        Ok(edges)
    }
}

impl GraphSource for CsvLoader {
    fn load_edges(&mut self) -> Result<(usize, Vec<Edge>), Error> {
        let edges = self.parse_csv_to_edges()?;
        let num_nodes = edges
            .iter()
            .map(|&(u, v, _)| u.max(v) + 1)
            .max()
            .unwrap_or(0);

        info!(
            path = %self.path.display(),
            nodes = num_nodes,
            edges = edges.len(),
            "loaded edge list"
        );
        Ok((num_nodes, edges))
    }
}
