use thiserror::Error;

use common::error::Error as MinMeanCycleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid simulator settings: {0}")]
    InvalidSimulation(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] MinMeanCycleError),
}
