use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use common::config::SolverConfig;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    /// Solver name, or `all` to run and compare every solver.
    pub algorithm: String,
    /// Sentinel handed to the solvers as `plus_infinity`.
    pub plus_infinity: i64,
    pub lambda_hint: Option<f64>,
    /// Largest accepted spread between solver answers when running `all`.
    pub agreement_tolerance: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            algorithm: "all".to_string(),
            plus_infinity: i64::MAX,
            lambda_hint: None,
            agreement_tolerance: 1e-4,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub total_nodes: usize,
    /// Random edges added on top of the Hamiltonian ring.
    pub extra_edges: usize,
    pub min_weight: i64,
    pub max_weight: i64,
    /// Fixed seed for reproducible graphs; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            total_nodes: 64,
            extra_edges: 256,
            min_weight: -100,
            max_weight: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub runner: RunnerConfig,
    pub simulator: SimulatorConfig,
}

/// Config file used when no `--config` is given.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

/// Loads configuration from a TOML file and `MCM_` environment variables.
///
/// An explicit path must exist; the default path is optional and every
/// missing key falls back to its default. Nested keys use a double
/// underscore, e.g. `MCM_RUNNER__ALGORITHM=howard`.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let (config_file_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (default_config_path()?, false),
    };

    if required && !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(
            File::from(config_file_path.as_path())
                .format(FileFormat::Toml)
                .required(required),
        )
        .add_source(
            Environment::with_prefix("MCM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.solver.validate()?;
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::PolicyUpdate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write config");
        temp_file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.runner.algorithm, "all");
        assert_eq!(config.runner.plus_infinity, i64::MAX);
        assert_eq!(config.runner.lambda_hint, None);
        assert_eq!(config.simulator.seed, None);
        assert!(config.solver.check_connectivity);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp_file = write_config(
            "\
[runner]
algorithm = \"howard\"

[solver.howard]
check_limit = 5
policy_update = \"best_per_node\"

[simulator]
total_nodes = 10
seed = 7
",
        );

        let config = load_config(Some(temp_file.path())).expect("config should load");

        assert_eq!(config.runner.algorithm, "howard");
        assert_eq!(config.runner.agreement_tolerance, 1e-4);
        assert_eq!(config.solver.howard.check_limit, Some(5));
        assert_eq!(
            config.solver.howard.policy_update,
            PolicyUpdate::BestPerNode
        );
        assert_eq!(config.solver.tolerances.epsilon, 1e-6);
        assert_eq!(config.simulator.total_nodes, 10);
        assert_eq!(config.simulator.seed, Some(7));
        assert_eq!(config.simulator.extra_edges, 256);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = load_config(Some(Path::new("no_such_config.toml")));
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn test_invalid_tolerance_is_rejected() {
        let temp_file = write_config("[solver.tolerances]\nepsilon = 0.0\n");
        let result = load_config(Some(temp_file.path()));
        assert!(matches!(result, Err(Error::GraphError(_))));
    }
}
